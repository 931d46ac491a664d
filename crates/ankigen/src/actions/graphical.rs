//! GUI-related AnkiConnect actions.
//!
//! This module provides operations for controlling Anki's graphical interface.
//!
//! # Example
//!
//! ```no_run
//! use ankigen::AnkiClient;
//!
//! # async fn example() -> ankigen::Result<()> {
//! let client = AnkiClient::new();
//!
//! // Open the Add Cards dialog with a prefilled Basic note
//! client.gui().add_basic_card("Default", "Question", "Answer").await?;
//!
//! // See what the reviewer is showing
//! if let Some(card) = client.gui().current_card().await? {
//!     println!("Reviewing card {}", card.card_id);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::debug;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{CurrentCard, Note};

/// Provides access to GUI-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::gui()`].
#[derive(Debug)]
pub struct GuiActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct BrowseParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct AddCardsParams<'a> {
    note: &'a Note,
}

impl<'a> GuiActions<'a> {
    /// Open the card browser with a search query.
    ///
    /// Returns the IDs of the cards the browser shows.
    pub async fn browse(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("guiBrowse", BrowseParams { query })
            .await
    }

    /// Open the Add Cards dialog prefilled with a note.
    ///
    /// Returns the ID AnkiConnect reports for the note, or `None` if it
    /// reports none.
    pub async fn add_cards(&self, note: &Note) -> Result<Option<i64>> {
        debug!(deck = %note.deck_name, model = %note.model_name, "Opening Add Cards dialog");
        self.client
            .invoke("guiAddCards", AddCardsParams { note })
            .await
    }

    /// Open the Add Cards dialog with a [`Note::basic`] front/back note.
    pub async fn add_basic_card(&self, deck: &str, front: &str, back: &str) -> Result<Option<i64>> {
        self.add_cards(&Note::basic(deck, front, back)).await
    }

    /// Get the card currently shown in the reviewer.
    ///
    /// Returns `None` when Anki is not reviewing.
    pub async fn current_card(&self) -> Result<Option<CurrentCard>> {
        self.client.invoke_without_params("guiCurrentCard").await
    }
}
