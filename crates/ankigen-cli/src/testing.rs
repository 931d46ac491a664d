//! In-memory AnkiConnect stand-in for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ankigen::{AnkiClient, RawResponse, SendFuture, Transport};
use serde_json::{Value, json};

/// Replays canned replies in order and records every request body.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    replies: Arc<Mutex<VecDeque<ankigen::Result<RawResponse>>>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeTransport {
    /// Queue a successful reply carrying `result`.
    pub fn reply(self, result: Value) -> Self {
        self.raw(json!({"result": result, "error": null}))
    }

    /// Queue a reply whose envelope carries an error message.
    pub fn api_error(self, message: &str) -> Self {
        self.raw(json!({"result": null, "error": message}))
    }

    /// Queue a transport failure.
    pub fn fail(self, err: ankigen::Error) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    fn raw(self, body: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::ok(body)));
        self
    }

    /// Action names of the requests sent so far.
    pub fn actions(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|body| body["action"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// The `note` parameter of the most recent request.
    pub fn last_note(&self) -> Value {
        self.requests.lock().unwrap().last().unwrap()["params"]["note"].clone()
    }

    /// A client that talks to this transport.
    pub fn client(&self) -> AnkiClient {
        AnkiClient::builder().transport(self.clone()).build()
    }
}

impl Transport for FakeTransport {
    fn send<'a>(&'a self, _url: &'a str, body: &'a Value) -> SendFuture<'a> {
        self.requests.lock().unwrap().push(body.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ankigen::Error::Transport("no reply queued".into())));
        Box::pin(async move { reply })
    }
}
