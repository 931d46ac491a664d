//! Error types for the ankigen crate.
//!
//! The variants map onto the ways a call to AnkiConnect can fail:
//!
//! - [`Error::ConnectionRefused`]: Anki is not running or AnkiConnect is not installed
//! - [`Error::AnkiConnect`]: AnkiConnect answered with an error message
//! - [`Error::Http`], [`Error::Transport`], [`Error::Status`]: anything else that
//!   went wrong between us and the add-on
//!
//! # Example
//!
//! ```no_run
//! use ankigen::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(Error::AnkiConnect(msg)) => eprintln!("Anki said: {}", msg),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Covers timeouts and every transport failure other than a refused
    /// connection, which is reported as [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom [`Transport`](crate::Transport).
    #[error("transport failed: {0}")]
    Transport(String),

    /// AnkiConnect answered with a non-success HTTP status.
    #[error("AnkiConnect responded with HTTP status {0}")]
    Status(u16),

    /// AnkiConnect returned an error message.
    ///
    /// The message is shown exactly as AnkiConnect reported it, e.g.
    /// "deck was not found" or "model was not found".
    #[error("{0}")]
    AnkiConnect(String),

    /// JSON serialization/deserialization error.
    ///
    /// Occurs when the response body is not an AnkiConnect envelope or the
    /// result has an unexpected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    ///
    /// This error occurs when:
    /// - Anki is not running
    /// - The AnkiConnect add-on is not installed
    /// - AnkiConnect is configured on a different port
    #[error(
        "Could not connect to Anki. Please make sure Anki is running and the AnkiConnect add-on is installed."
    )]
    ConnectionRefused,

    /// A card content document could not be parsed.
    #[error("invalid card content: {0}")]
    Content(String),
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
