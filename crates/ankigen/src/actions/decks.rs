//! Deck-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> DeckActions<'a> {
    /// Get all deck names.
    ///
    /// Names come back in the order AnkiConnect lists them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankigen::AnkiClient;
    /// # async fn example() -> ankigen::Result<()> {
    /// let client = AnkiClient::new();
    /// let names = client.decks().names().await?;
    /// for name in names {
    ///     println!("{}", name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }
}
