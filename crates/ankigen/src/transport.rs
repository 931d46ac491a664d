//! The seam between [`AnkiClient`](crate::AnkiClient) and the network.
//!
//! A [`Transport`] delivers one JSON request body to a URL and hands back
//! the status code and JSON body of the reply. [`HttpTransport`] does this
//! over HTTP with reqwest; tests can plug in a fake that never opens a
//! socket.
//!
//! # Example
//!
//! ```
//! use std::future::Future;
//! use std::pin::Pin;
//!
//! use ankigen::{AnkiClient, RawResponse, Result, Transport};
//! use serde_json::{Value, json};
//!
//! #[derive(Debug)]
//! struct AlwaysSix;
//!
//! impl Transport for AlwaysSix {
//!     fn send<'a>(
//!         &'a self,
//!         _url: &'a str,
//!         _body: &'a Value,
//!     ) -> Pin<Box<dyn Future<Output = Result<RawResponse>> + Send + 'a>> {
//!         Box::pin(async { Ok(RawResponse::ok(json!({"result": 6, "error": null}))) })
//!     }
//! }
//!
//! let client = AnkiClient::builder().transport(AlwaysSix).build();
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{Error, Result};

/// Boxed future returned by [`Transport::send`].
pub type SendFuture<'a> = Pin<Box<dyn Future<Output = Result<RawResponse>> + Send + 'a>>;

/// The reply to a single transport call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body. `Null` when the status was not a success.
    pub body: Value,
}

impl RawResponse {
    /// A `200 OK` reply with the given body.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to AnkiConnect.
///
/// Implementations post `body` to `url` with `Content-Type: application/json`.
/// A refused connection must be reported as [`Error::ConnectionRefused`] so
/// callers can tell "Anki is not running" apart from other failures.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Deliver `body` to `url` and return the reply.
    fn send<'a>(&'a self, url: &'a str, body: &'a Value) -> SendFuture<'a>;
}

/// [`Transport`] over HTTP using reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }
}

impl Transport for HttpTransport {
    fn send<'a>(&'a self, url: &'a str, body: &'a Value) -> SendFuture<'a> {
        Box::pin(async move {
            let response = self
                .http_client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(|e| {
                    if is_connection_refused(&e) {
                        Error::ConnectionRefused
                    } else {
                        Error::Http(e)
                    }
                })?;

            let status = response.status().as_u16();
            if !response.status().is_success() {
                return Ok(RawResponse {
                    status,
                    body: Value::Null,
                });
            }

            let body = response.json().await?;
            Ok(RawResponse { status, body })
        })
    }
}

/// Whether the connection itself was refused.
///
/// DNS failures and connect timeouts also count as connect errors in
/// reqwest; only an `io::Error` of kind `ConnectionRefused` somewhere in the
/// source chain means nothing is listening on the port.
fn is_connection_refused(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        source = cause.source();
    }
    false
}
