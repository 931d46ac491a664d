//! Action modules for AnkiConnect operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod cards;
mod decks;
mod graphical;
mod miscellaneous;
mod models;
mod notes;

pub use cards::CardActions;
pub use decks::DeckActions;
pub use graphical::GuiActions;
pub use miscellaneous::{MiscActions, MultiAction};
pub use models::ModelActions;
pub use notes::NoteActions;
