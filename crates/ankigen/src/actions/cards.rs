//! Card-related AnkiConnect actions.
//!
//! Cards are generated from notes; one note can produce several cards.
//!
//! # Example
//!
//! ```no_run
//! use ankigen::AnkiClient;
//!
//! # async fn example() -> ankigen::Result<()> {
//! let client = AnkiClient::new();
//!
//! let card_ids = client.cards().find_in_deck("Spanish").await?;
//! for card in client.cards().info(&card_ids).await? {
//!     println!("Card {}: {} reviews", card.card_id, card.reps);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::CardInfo;

/// Provides access to card-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct FindCardsParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct CardsParams<'a> {
    cards: &'a [i64],
}

impl<'a> CardActions<'a> {
    /// Find card IDs matching an Anki search query.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findCards", FindCardsParams { query })
            .await
    }

    /// Find every card in a deck.
    ///
    /// The deck name is quoted, so names with spaces work.
    pub async fn find_in_deck(&self, deck: &str) -> Result<Vec<i64>> {
        self.find(&format!("deck:\"{}\"", deck)).await
    }

    /// Get detailed information about cards.
    pub async fn info(&self, card_ids: &[i64]) -> Result<Vec<CardInfo>> {
        self.client
            .invoke("cardsInfo", CardsParams { cards: card_ids })
            .await
    }

    /// Suspend cards.
    ///
    /// Returns `true` if at least one card was newly suspended.
    pub async fn suspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("suspend", CardsParams { cards: card_ids })
            .await
    }

    /// Unsuspend cards.
    ///
    /// Returns `true` if at least one card was unsuspended.
    pub async fn unsuspend(&self, card_ids: &[i64]) -> Result<bool> {
        self.client
            .invoke("unsuspend", CardsParams { cards: card_ids })
            .await
    }
}
