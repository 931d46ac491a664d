//! Card-related types.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::NoteField;

/// The card currently shown in Anki's reviewer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCard {
    /// The card ID.
    pub card_id: i64,
    /// The note ID.
    #[serde(default)]
    pub note_id: i64,
    /// Question HTML.
    pub question: String,
    /// Answer HTML.
    pub answer: String,
    /// Deck name.
    pub deck_name: String,
    /// Model name.
    pub model_name: String,
    /// Field values, keyed by field name.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
}

impl CurrentCard {
    /// Field names ordered as they appear in the note type.
    pub fn field_names(&self) -> Vec<&str> {
        ordered_field_names(&self.fields)
    }
}

/// Information about a card, as returned by `cardsInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// The card ID.
    pub card_id: i64,
    /// The note ID this card was generated from.
    #[serde(default, alias = "note", alias = "nid")]
    pub note_id: i64,
    /// The deck this card belongs to.
    #[serde(default)]
    pub deck_name: String,
    /// The note type (model) name.
    #[serde(default)]
    pub model_name: String,
    /// The card's question side (HTML).
    #[serde(default)]
    pub question: String,
    /// The card's answer side (HTML).
    #[serde(default)]
    pub answer: String,
    /// Field values from the note.
    #[serde(default)]
    pub fields: HashMap<String, NoteField>,
    /// The queue the card is in (-3 = manually buried, -2 = sibling buried,
    /// -1 = suspended, 0 = new, 1 = learning, 2 = review, 3 = day learn).
    #[serde(default)]
    pub queue: i32,
    /// Due position/date (meaning depends on card type).
    #[serde(default)]
    pub due: i64,
    /// Current interval in days.
    #[serde(default)]
    pub interval: i64,
    /// Ease factor in permille, e.g. 2500 = 250%.
    #[serde(default, alias = "factor")]
    pub ease_factor: i64,
    /// Number of reviews.
    #[serde(default)]
    pub reps: i64,
    /// Number of lapses.
    #[serde(default)]
    pub lapses: i64,
}

impl CardInfo {
    /// Ease as a percentage.
    pub fn ease_percent(&self) -> f64 {
        self.ease_factor as f64 / 10.0
    }

    /// Human-readable name of the card's queue.
    pub fn queue_description(&self) -> &'static str {
        match self.queue {
            0 => "New",
            1 => "Learning",
            2 => "Review",
            3 => "Day Learning",
            -1 => "Suspended",
            -2 => "Buried",
            -3 => "User Buried",
            _ => "Unknown",
        }
    }
}

pub(crate) fn ordered_field_names(fields: &HashMap<String, NoteField>) -> Vec<&str> {
    let mut names: Vec<(&str, i32)> = fields
        .iter()
        .map(|(name, field)| (name.as_str(), field.order))
        .collect();
    names.sort_by_key(|(_, order)| *order);
    names.into_iter().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(queue: i32, factor: i64) -> CardInfo {
        serde_json::from_value(json!({"cardId": 1, "queue": queue, "factor": factor})).unwrap()
    }

    #[test]
    fn test_queue_description() {
        assert_eq!(card(0, 0).queue_description(), "New");
        assert_eq!(card(3, 0).queue_description(), "Day Learning");
        assert_eq!(card(-1, 0).queue_description(), "Suspended");
        assert_eq!(card(-3, 0).queue_description(), "User Buried");
        assert_eq!(card(4, 0).queue_description(), "Unknown");
    }

    #[test]
    fn test_ease_percent_from_factor() {
        assert_eq!(card(2, 2500).ease_percent(), 250.0);
        assert_eq!(card(2, 2505).ease_percent(), 250.5);
    }
}
