//! An AnkiConnect client for prefilling Anki's "Add Cards" dialog.
//!
//! The client speaks AnkiConnect's JSON protocol: every call is a POST of
//! `{action, version, params}` and every reply is `{result, error}`.
//!
//! # Quick Start
//!
//! ```no_run
//! use ankigen::AnkiClient;
//!
//! # async fn example() -> ankigen::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! // Check that AnkiConnect is running
//! if !client.misc().is_supported().await? {
//!     eprintln!("AnkiConnect is too old");
//! }
//!
//! // Open the Add Cards dialog in the first deck
//! let decks = client.decks().names().await?;
//! client.gui().add_basic_card(&decks[0], "hola", "hello").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use ankigen::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(5))
//!     .build();
//! ```
//!
//! Tests can swap the network out with [`ClientBuilder::transport`]; see
//! [`Transport`].
//!
//! # Action Groups
//!
//! - [`AnkiClient::cards()`] - Find, inspect, suspend and unsuspend cards
//! - [`AnkiClient::decks()`] - List decks
//! - [`AnkiClient::gui()`] - Open the Add Cards dialog and the browser, inspect the reviewer
//! - [`AnkiClient::models()`] - List note types
//! - [`AnkiClient::notes()`] - Add, find, inspect and update notes
//! - [`AnkiClient::misc()`] - Version checks and batched actions
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod content;
pub mod error;
mod request;
pub mod transport;
pub mod types;

pub use client::{API_VERSION, AnkiClient, ClientBuilder, DEFAULT_URL};
pub use content::CardContent;
pub use error::{Error, Result};
pub use transport::{HttpTransport, RawResponse, SendFuture, Transport};
pub use actions::MultiAction;
pub use types::{
    BASIC_MODEL, CardInfo, CurrentCard, DEFAULT_TAG, Note, NoteBuilder, NoteField, NoteInfo,
};
