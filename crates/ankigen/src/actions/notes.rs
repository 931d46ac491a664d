//! Note-related AnkiConnect actions.
//!
//! Unlike [`GuiActions::add_cards`](crate::actions::GuiActions::add_cards),
//! these add and change notes directly, without showing a dialog.

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{Note, NoteInfo};

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct AddNoteParams<'a> {
    note: &'a Note,
}

#[derive(Serialize)]
struct FindNotesParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NotesInfoParams<'a> {
    notes: &'a [i64],
}

#[derive(Serialize)]
struct UpdateNoteFieldsParams<'a> {
    note: UpdateNoteFieldsInner<'a>,
}

#[derive(Serialize)]
struct UpdateNoteFieldsInner<'a> {
    id: i64,
    fields: &'a HashMap<String, String>,
}

impl<'a> NoteActions<'a> {
    /// Add a note and return its ID.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankigen::{AnkiClient, Note};
    /// # async fn example() -> ankigen::Result<()> {
    /// let client = AnkiClient::new();
    /// let id = client.notes().add(&Note::basic("Default", "Q", "A")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add(&self, note: &Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note }).await
    }

    /// Find note IDs matching an Anki search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }

    /// Get detailed information about notes.
    pub async fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesInfoParams { notes: note_ids })
            .await
    }

    /// Replace field values on an existing note.
    ///
    /// Fields not present in `fields` are left unchanged.
    pub async fn update_fields(
        &self,
        note_id: i64,
        fields: &HashMap<String, String>,
    ) -> Result<()> {
        self.client
            .invoke(
                "updateNoteFields",
                UpdateNoteFieldsParams {
                    note: UpdateNoteFieldsInner {
                        id: note_id,
                        fields,
                    },
                },
            )
            .await
    }
}
