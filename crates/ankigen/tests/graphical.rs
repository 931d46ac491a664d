//! Tests for GUI actions.

mod common;

use ankigen::NoteBuilder;
use common::{mock_action, mock_anki_error, mock_anki_response, setup};
use serde_json::json;
use wiremock::matchers::{body_json, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_gui_add_basic_card_sends_note() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "action": "guiAddCards",
            "version": 6,
            "params": {
                "note": {
                    "deckName": "Spanish",
                    "modelName": "Basic",
                    "fields": {"Front": "hola", "Back": "hello"},
                    "tags": ["anki-card-generator"]
                }
            }
        })))
        .respond_with(mock_anki_response(1234567890_i64))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .gui()
        .add_basic_card("Spanish", "hola", "hello")
        .await
        .unwrap();
    assert_eq!(result, Some(1234567890));
}

#[tokio::test]
async fn test_gui_add_cards_custom_note() {
    let (server, client) = setup().await;

    mock_action(&server, "guiAddCards", mock_anki_response(42_i64)).await;

    let note = NoteBuilder::new("Default", "Cloze")
        .field("Text", "The capital of Romania is {{c1::Bucharest}}")
        .tag("countries")
        .build();

    let result = client.gui().add_cards(&note).await.unwrap();
    assert_eq!(result, Some(42));
}

#[tokio::test]
async fn test_gui_add_cards_null_result() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "guiAddCards",
        ResponseTemplate::new(200).set_body_json(json!({"result": null, "error": null})),
    )
    .await;

    let result = client
        .gui()
        .add_basic_card("Default", "Q", "A")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_gui_add_cards_model_missing() {
    let (server, client) = setup().await;

    mock_action(&server, "guiAddCards", mock_anki_error("model was not found: Basic")).await;

    let err = client
        .gui()
        .add_basic_card("Default", "Q", "A")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "model was not found: Basic");
}

#[tokio::test]
async fn test_gui_current_card_none() {
    let (server, client) = setup().await;

    // When not in review, current_card returns null
    mock_action(
        &server,
        "guiCurrentCard",
        ResponseTemplate::new(200).set_body_json(json!({"result": null, "error": null})),
    )
    .await;

    let result = client.gui().current_card().await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_gui_current_card() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "guiCurrentCard",
        mock_anki_response(json!({
            "cardId": 1498938915662_i64,
            "noteId": 1498938915660_i64,
            "question": "<div>hola</div>",
            "answer": "<div>hola</div><hr id=answer>hello",
            "deckName": "Spanish",
            "modelName": "Basic",
            "fields": {
                "Back": {"value": "hello", "order": 1},
                "Front": {"value": "hola", "order": 0}
            },
            "buttons": [1, 2, 3],
            "nextReviews": ["<1m", "<10m", "4d"]
        })),
    )
    .await;

    let card = client.gui().current_card().await.unwrap().unwrap();
    assert_eq!(card.card_id, 1498938915662);
    assert_eq!(card.deck_name, "Spanish");
    assert_eq!(card.field_names(), vec!["Front", "Back"]);
    assert_eq!(card.fields["Back"].value, "hello");
}

#[tokio::test]
async fn test_gui_browse() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "guiBrowse",
        mock_anki_response(vec![1234567890_i64, 1234567891, 1234567892]),
    )
    .await;

    let result = client.gui().browse("deck:Default").await.unwrap();
    assert_eq!(result.len(), 3);
}
