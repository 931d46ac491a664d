//! Note-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name of Anki's built-in two-field note type.
pub const BASIC_MODEL: &str = "Basic";

/// Tag attached to every note created through this crate's helpers.
pub const DEFAULT_TAG: &str = "anki-card-generator";

/// A new note to be added to Anki.
///
/// Use [`NoteBuilder`] for a more ergonomic way to construct notes, or
/// [`Note::basic`] for the common front/back case.
///
/// # Field Values
///
/// Field values are HTML. If you need literal `<` or `>`, use `&lt;` and `&gt;`.
/// Field names are case-sensitive and must match the model's field names exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    pub tags: Vec<String>,
}

impl Note {
    /// A `Basic` note with `Front` and `Back` fields, tagged with [`DEFAULT_TAG`].
    ///
    /// # Example
    ///
    /// ```
    /// use ankigen::Note;
    ///
    /// let note = Note::basic("Spanish", "hola", "hello");
    /// assert_eq!(note.model_name, "Basic");
    /// assert_eq!(note.fields["Front"], "hola");
    /// assert_eq!(note.tags, vec!["anki-card-generator"]);
    /// ```
    pub fn basic(
        deck: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        NoteBuilder::new(deck, BASIC_MODEL)
            .field("Front", front)
            .field("Back", back)
            .tag(DEFAULT_TAG)
            .build()
    }
}

/// Information about an existing note, as returned by `notesInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    pub model_name: String,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field values and metadata.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// Card IDs generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
}

impl NoteInfo {
    /// Field names ordered as they appear in the note type.
    pub fn field_names(&self) -> Vec<&str> {
        super::card::ordered_field_names(&self.fields)
    }
}

/// A field value with its position in the note type.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    pub order: i32,
}

/// Builder for creating notes with a fluent API.
///
/// # Example
///
/// ```
/// use ankigen::NoteBuilder;
///
/// let note = NoteBuilder::new("My Deck", "Basic")
///     .field("Front", "What is the capital of France?")
///     .field("Back", "Paris")
///     .tag("geography")
///     .tag("europe")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteBuilder {
    deck_name: String,
    model_name: String,
    fields: HashMap<String, String>,
    tags: Vec<String>,
}

impl NoteBuilder {
    /// Create a new note builder.
    ///
    /// # Arguments
    ///
    /// * `deck` - The deck name to add the note to
    /// * `model` - The note type (model) name
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            deck_name: deck.into(),
            model_name: model.into(),
            ..Default::default()
        }
    }

    /// Set a field value.
    ///
    /// Field names are case-sensitive and must match the model exactly.
    /// Values are HTML - use `&lt;` for literal `<`.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags to the note.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Build the note.
    pub fn build(self) -> Note {
        Note {
            deck_name: self.deck_name,
            model_name: self.model_name,
            fields: self.fields,
            tags: self.tags,
        }
    }
}
