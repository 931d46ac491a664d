//! The AnkiConnect client and builder.

use std::sync::Arc;
use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::actions::{
    CardActions, DeckActions, GuiActions, MiscActions, ModelActions, NoteActions,
};
use crate::error::{Error, Result};
use crate::request::{AnkiRequest, AnkiResponse};
use crate::transport::{HttpTransport, Transport};

/// Default URL for AnkiConnect.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// AnkiConnect protocol version sent with every request.
///
/// Also the minimum version a running AnkiConnect must report for
/// [`MiscActions::is_supported`] to succeed.
pub const API_VERSION: u8 = 6;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The main client for interacting with AnkiConnect.
///
/// # Example
///
/// ```no_run
/// use ankigen::AnkiClient;
///
/// # async fn example() -> ankigen::Result<()> {
/// // Create a client with default settings
/// let client = AnkiClient::new();
///
/// // Check the AnkiConnect version
/// let version = client.misc().version().await?;
/// println!("AnkiConnect version: {}", version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    api_key: Option<String>,
    api_version: u8,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 10 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The AnkiConnect URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// The protocol version sent with each request.
    pub fn api_version(&self) -> u8 {
        self.api_version
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Access model (note type) operations.
    pub fn models(&self) -> ModelActions<'_> {
        ModelActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access GUI operations.
    pub fn gui(&self) -> GuiActions<'_> {
        GuiActions { client: self }
    }

    /// Execute an action without parameters.
    ///
    /// The request carries an empty `params` object.
    pub async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request =
            AnkiRequest::without_params(action, self.api_version, self.api_key.as_deref());
        self.send_request(&request).await
    }

    /// Execute an action with parameters.
    ///
    /// Sends `{action, version, params}` and returns the envelope's `result`
    /// deserialized as `R`. A non-null `error` in the envelope becomes
    /// [`Error::AnkiConnect`] with the message unchanged. Use
    /// `serde_json::Value` as `R` to get the raw result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankigen::AnkiClient;
    /// # async fn example() -> ankigen::Result<()> {
    /// let client = AnkiClient::new();
    /// let ids: Vec<i64> = client
    ///     .invoke("findCards", serde_json::json!({"query": "deck:Default"}))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, self.api_version, params, self.api_key.as_deref());
        self.send_request(&request).await
    }

    /// Send a request to AnkiConnect and process the response.
    async fn send_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        debug!(action = request.action, url = %self.base_url, "Sending AnkiConnect request");

        let body = serde_json::to_value(request)?;
        let raw = self.transport.send(&self.base_url, &body).await?;

        if !raw.is_success() {
            return Err(Error::Status(raw.status));
        }

        let anki_response: AnkiResponse = serde_json::from_value(raw.body)?;

        if let Some(err) = anki_response.error {
            debug!(action = request.action, error = %err, "AnkiConnect returned an error");
            return Err(Error::AnkiConnect(err));
        }

        Ok(serde_json::from_value(anki_response.result)?)
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ankigen::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    api_version: u8,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            api_version: API_VERSION,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authentication.
    ///
    /// Only required if AnkiConnect is configured to require an API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the protocol version sent with each request.
    ///
    /// Defaults to [`API_VERSION`].
    pub fn api_version(mut self, version: u8) -> Self {
        self.api_version = version;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 10 seconds. Ignored when a custom transport is set.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                HttpTransport::new(self.timeout).expect("Failed to build HTTP client"),
            ),
        };

        AnkiClient {
            transport,
            base_url: self.base_url,
            api_key: self.api_key,
            api_version: self.api_version,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
