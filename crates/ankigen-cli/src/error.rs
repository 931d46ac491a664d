//! Error types for the ankigen command.
//!
//! Client failures are wrapped from [`ankigen::Error`]; the remaining
//! variants are decisions the command makes itself.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end an `ankigen` run.
///
/// Every variant is terminal: `main` prints `Error: <message>` and exits
/// with status 1.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line did not describe a card.
    #[error("{0}")]
    Usage(String),

    /// AnkiConnect could not be reached or is too old.
    #[error(
        "Could not connect to Anki. Please make sure:\n  \
         1. Anki is running\n  \
         2. AnkiConnect add-on is installed (add-on code: 2055492159)\n  \
         3. You've restarted Anki after installing the add-on"
    )]
    NotConnected,

    /// The collection has no decks to add the card to.
    #[error("No decks available in Anki. Please create a deck first.")]
    NoDecks,

    /// A content file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    ReadContent {
        /// The file that failed to read; `-` for standard input.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Output could not be written.
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the AnkiConnect client.
    #[error(transparent)]
    Client(#[from] ankigen::Error),
}
