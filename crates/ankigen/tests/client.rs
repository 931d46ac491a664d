//! Tests for the request/response envelope handling.

mod common;

use std::net::TcpListener;
use std::time::Duration;

use ankigen::{AnkiClient, Error};
use common::{mock_action, mock_anki_error, mock_anki_response, setup};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_request_envelope_shape() {
    let server = MockServer::start().await;
    let client = AnkiClient::builder().url(server.uri()).build();

    Mock::given(method("POST"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "action": "deckNames",
            "version": 6,
            "params": {}
        })))
        .respond_with(mock_anki_response(vec!["Default"]))
        .expect(1)
        .mount(&server)
        .await;

    let decks = client.decks().names().await.unwrap();
    assert_eq!(decks, vec!["Default"]);
}

#[tokio::test]
async fn test_api_key_is_sent() {
    let server = MockServer::start().await;
    let client = AnkiClient::builder()
        .url(server.uri())
        .api_key("secret")
        .build();

    Mock::given(method("POST"))
        .and(body_json(json!({
            "action": "version",
            "version": 6,
            "key": "secret",
            "params": {}
        })))
        .respond_with(mock_anki_response(6))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.misc().version().await.unwrap(), 6);
}

#[tokio::test]
async fn test_configured_protocol_version_is_sent() {
    let server = MockServer::start().await;
    let client = AnkiClient::builder()
        .url(server.uri())
        .api_version(5)
        .build();

    Mock::given(method("POST"))
        .and(body_json(json!({"action": "version", "version": 5, "params": {}})))
        .respond_with(mock_anki_response(5))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.misc().is_supported().await.unwrap());
}

#[tokio::test]
async fn test_invoke_returns_raw_result() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "findCards",
        mock_anki_response(vec![1_i64, 2, 3]),
    )
    .await;

    let result: Value = client
        .invoke("findCards", json!({"query": "deck:Default"}))
        .await
        .unwrap();
    assert_eq!(result, json!([1, 2, 3]));
}

#[tokio::test]
async fn test_error_message_is_verbatim() {
    let (server, client) = setup().await;

    mock_action(&server, "deckNames", mock_anki_error("collection is not available")).await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::AnkiConnect(ref msg) if msg == "collection is not available"));
    assert_eq!(err.to_string(), "collection is not available");
}

#[tokio::test]
async fn test_error_wins_over_result() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "deckNames",
        ResponseTemplate::new(200).set_body_json(json!({
            "result": ["Default"],
            "error": "something broke"
        })),
    )
    .await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::AnkiConnect(_)));
}

#[tokio::test]
async fn test_http_status_error() {
    let (server, client) = setup().await;

    mock_action(&server, "version", ResponseTemplate::new(500)).await;

    let err = client.misc().version().await.unwrap_err();
    assert!(matches!(err, Error::Status(500)));
}

#[tokio::test]
async fn test_unexpected_result_shape() {
    let (server, client) = setup().await;

    mock_action(&server, "deckNames", mock_anki_response("not a list")).await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    // Grab a free port, then close it so nothing is listening.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = AnkiClient::builder()
        .url(format!("http://127.0.0.1:{}", port))
        .build();

    let err = client.misc().version().await.unwrap_err();
    assert!(matches!(err, Error::ConnectionRefused));
    let message = err.to_string();
    assert!(message.contains("Anki is running"));
    assert!(message.contains("AnkiConnect add-on is installed"));
}

#[tokio::test]
async fn test_unresolvable_host_is_not_connection_refused() {
    let client = AnkiClient::builder()
        .url("http://no-such-host.invalid:8765")
        .build();

    let err = client.misc().version().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    let client = AnkiClient::builder()
        .url(server.uri())
        .timeout(Duration::from_millis(100))
        .build();

    Mock::given(method("POST"))
        .respond_with(mock_anki_response(6).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = client.misc().version().await.unwrap_err();
    assert!(matches!(err, Error::Http(ref e) if e.is_timeout()), "got {:?}", err);
}
