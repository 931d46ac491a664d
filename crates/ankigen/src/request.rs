//! Internal request and response types for the AnkiConnect protocol.

use serde::{Deserialize, Serialize};

/// Parameters for actions that take none.
///
/// Serializes to `{}`; AnkiConnect always expects a `params` object.
#[derive(Debug, Default, Serialize)]
pub(crate) struct NoParams {}

/// The request format expected by AnkiConnect.
#[derive(Debug, Serialize)]
pub(crate) struct AnkiRequest<'a, T> {
    /// The action to perform.
    pub action: &'a str,
    /// The API version.
    pub version: u8,
    /// Optional API key for authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    /// Parameters for the action.
    pub params: T,
}

impl<'a, T> AnkiRequest<'a, T> {
    /// Create a new request with parameters.
    pub fn new(action: &'a str, version: u8, params: T, key: Option<&'a str>) -> Self {
        Self {
            action,
            version,
            key,
            params,
        }
    }
}

impl<'a> AnkiRequest<'a, NoParams> {
    /// Create a new request without parameters.
    pub fn without_params(action: &'a str, version: u8, key: Option<&'a str>) -> Self {
        Self::new(action, version, NoParams::default(), key)
    }
}

/// The response format returned by AnkiConnect.
#[derive(Debug, Deserialize)]
pub(crate) struct AnkiResponse {
    /// The result of the action; null when the action has none or failed.
    #[serde(default)]
    pub result: serde_json::Value,
    /// The error message, if the action failed.
    #[serde(default)]
    pub error: Option<String>,
}
