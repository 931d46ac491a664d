//! Domain types for AnkiConnect.
//!
//! This module contains the data structures used to represent the Anki
//! entities the client sends and receives.

mod card;
mod note;

pub use card::{CardInfo, CurrentCard};
pub use note::{BASIC_MODEL, DEFAULT_TAG, Note, NoteBuilder, NoteField, NoteInfo};
