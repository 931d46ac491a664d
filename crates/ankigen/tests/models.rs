//! Tests for model actions.

mod common;

use common::{mock_action, mock_anki_response, setup};

#[tokio::test]
async fn test_model_names() {
    let (server, client) = setup().await;

    mock_action(
        &server,
        "modelNames",
        mock_anki_response(vec!["Basic", "Basic (and reversed card)", "Cloze"]),
    )
    .await;

    let models = client.models().names().await.unwrap();
    assert_eq!(models.len(), 3);
    assert_eq!(models[0], "Basic");
}
