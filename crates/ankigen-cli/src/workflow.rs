//! The prefill workflow: check AnkiConnect, pick a deck, open the dialog.

use ankigen::{AnkiClient, NoteBuilder};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// What to put in the Add Cards dialog.
#[derive(Debug, Clone)]
pub struct CardRequest {
    /// Front field text.
    pub front: String,
    /// Back field text.
    pub back: String,
    /// Deck override; the first deck Anki lists is used when unset or empty.
    pub deck: Option<String>,
    /// Note type name.
    pub model: String,
    /// Tags for the note.
    pub tags: Vec<String>,
}

/// Outcome of a successful prefill.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefilled {
    /// Deck the dialog was opened for.
    pub deck: String,
    /// Note ID reported by AnkiConnect, if any.
    pub note_id: Option<i64>,
}

/// Fail with [`Error::NotConnected`] unless a compatible AnkiConnect answers.
pub async fn ensure_connected(client: &AnkiClient) -> Result<()> {
    println!("Testing connection to Anki...");
    match client.misc().is_supported().await {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::NotConnected),
        Err(e) => {
            warn!(error = %e, url = client.url(), "AnkiConnect version check failed");
            Err(Error::NotConnected)
        }
    }
}

/// Choose the target deck.
///
/// A non-empty override wins; otherwise the first listed deck, in the
/// order Anki returned them.
pub fn select_deck<'a>(deck_override: Option<&'a str>, decks: &'a [String]) -> Option<&'a str> {
    deck_override
        .filter(|name| !name.is_empty())
        .or_else(|| decks.first().map(String::as_str))
}

/// Run the full workflow for one card.
pub async fn prefill(client: &AnkiClient, request: &CardRequest) -> Result<Prefilled> {
    ensure_connected(client).await?;

    println!("Getting available decks...");
    let decks = client.decks().names().await?;
    if decks.is_empty() {
        return Err(Error::NoDecks);
    }
    info!(count = decks.len(), "Listed decks");

    let deck = select_deck(request.deck.as_deref(), &decks)
        .ok_or(Error::NoDecks)?
        .to_string();
    println!("Using deck: {}", deck);

    let note = NoteBuilder::new(&deck, &request.model)
        .field("Front", &request.front)
        .field("Back", &request.back)
        .tags(&request.tags)
        .build();

    println!("Opening Anki UI with card content...");
    let note_id = client.gui().add_cards(&note).await?;
    info!(deck = %deck, note_id = ?note_id, "Add Cards dialog opened");

    Ok(Prefilled { deck, note_id })
}
