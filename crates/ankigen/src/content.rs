//! Card content documents.
//!
//! Card text can be handed over as a single document where each side sits
//! between a pair of marker lines:
//!
//! ```text
//! ==front part==
//! Example Vocabulary Word
//! - [noun] definition goes here
//! ==front part==
//!
//! ==bottom part==
//! ## Example Usage
//! - Example sentence 1
//! ==bottom part==
//! ```
//!
//! Anything outside the markers is ignored.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Marker around the front side of a card.
pub const FRONT_MARKER: &str = "==front part==";

/// Marker around the back side of a card.
pub const BACK_MARKER: &str = "==bottom part==";

/// The two sides of a card extracted from a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    /// Text between the `==front part==` markers, trimmed.
    pub front: String,
    /// Text between the `==bottom part==` markers, trimmed.
    pub back: String,
}

impl CardContent {
    /// Parse a content document.
    ///
    /// Fails when either section is missing or unterminated.
    ///
    /// # Example
    ///
    /// ```
    /// use ankigen::CardContent;
    ///
    /// let doc = "==front part==\nhola\n==front part==\n==bottom part==\nhello\n==bottom part==";
    /// let content = CardContent::parse(doc)?;
    /// assert_eq!(content.front, "hola");
    /// assert_eq!(content.back, "hello");
    /// # Ok::<(), ankigen::Error>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            front: section(input, FRONT_MARKER)?.to_string(),
            back: section(input, BACK_MARKER)?.to_string(),
        })
    }
}

impl FromStr for CardContent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The trimmed text between the first two occurrences of `marker`.
fn section<'a>(input: &'a str, marker: &str) -> Result<&'a str> {
    let start = input
        .find(marker)
        .map(|idx| idx + marker.len())
        .ok_or_else(|| Error::Content(format!("missing `{}` section", marker)))?;

    let len = input[start..]
        .find(marker)
        .ok_or_else(|| Error::Content(format!("unterminated `{}` section", marker)))?;

    Ok(input[start..start + len].trim())
}
