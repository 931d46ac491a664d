//! Miscellaneous AnkiConnect actions.
//!
//! Version checking, used to find out whether AnkiConnect is reachable,
//! and batching several actions into one request.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to miscellaneous AnkiConnect operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct MultiParams<'a> {
    actions: &'a [MultiAction<'a>],
}

/// A single action for [`MiscActions::multi`].
#[derive(Debug, Clone, Serialize)]
pub struct MultiAction<'a> {
    /// The action name.
    pub action: &'a str,
    /// Parameters for the action; `{}` when it takes none.
    pub params: Value,
}

impl<'a> MultiAction<'a> {
    /// Create an action without parameters.
    pub fn new(action: &'a str) -> Self {
        Self {
            action,
            params: Value::Object(Default::default()),
        }
    }

    /// Create an action with parameters.
    pub fn with_params(action: &'a str, params: Value) -> Self {
        Self { action, params }
    }
}

impl<'a> MiscActions<'a> {
    /// Get the AnkiConnect API version.
    ///
    /// This is useful for verifying that AnkiConnect is running and accessible.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ankigen::AnkiClient;
    ///
    /// # async fn example() -> ankigen::Result<()> {
    /// let client = AnkiClient::new();
    /// let version = client.misc().version().await?;
    /// assert!(version >= 6);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<u32> {
        self.client.invoke_without_params("version").await
    }

    /// Whether the running AnkiConnect speaks at least the client's protocol version.
    ///
    /// Errors from the version call are returned unchanged; an older
    /// AnkiConnect yields `Ok(false)`.
    pub async fn is_supported(&self) -> Result<bool> {
        let version = self.version().await?;
        let required = u32::from(self.client.api_version());
        if version < required {
            warn!(version, required, "AnkiConnect version is too old");
            return Ok(false);
        }
        Ok(true)
    }

    /// Run several actions in one request.
    ///
    /// Results come back in the same order as `actions`. Each entry is the
    /// raw value AnkiConnect reports for that action.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankigen::{AnkiClient, MultiAction};
    /// # async fn example() -> ankigen::Result<()> {
    /// let client = AnkiClient::new();
    /// let results = client
    ///     .misc()
    ///     .multi(&[MultiAction::new("deckNames"), MultiAction::new("modelNames")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn multi(&self, actions: &[MultiAction<'_>]) -> Result<Vec<Value>> {
        self.client.invoke("multi", MultiParams { actions }).await
    }
}
