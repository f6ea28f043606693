//! The edge adapter must behave exactly like the listening server.

mod common;

use axum::http::StatusCode;
use common::{assert_cors, body_bytes, body_json, post_json, request, test_state, MockFactory};
use lingo_gateway::{EdgeHandler, Mode};

#[tokio::test]
async fn fetch_translates() {
    let factory = MockFactory::new(Ok(" Ciao ".to_string()));
    let edge = EdgeHandler::new(test_state(factory.clone(), Some("test-key"), Mode::Production));

    let response = edge
        .fetch(post_json("/translate", r#"{"text":"Hello","targetLanguage":"it"}"#))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body = body_json(response).await;
    assert_eq!(body["translation"], "Ciao");
    assert_eq!(body["targetLanguage"], "Italian");
    assert_eq!(factory.calls(), 1);
}

#[tokio::test]
async fn fetch_is_reusable_across_requests() {
    let factory = MockFactory::new(Ok("Hola".to_string()));
    let edge = EdgeHandler::new(test_state(factory.clone(), Some("test-key"), Mode::Production));

    for _ in 0..3 {
        let response = edge
            .fetch(post_json("/translate", r#"{"text":"Hello","targetLanguage":"es"}"#))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(factory.calls(), 3);
}

#[tokio::test]
async fn fetch_handles_preflight_and_not_found() {
    let factory = MockFactory::new(Ok("unused".to_string()));
    let edge = EdgeHandler::new(test_state(factory, None, Mode::Production));

    let preflight = edge.fetch(request("OPTIONS", "/translate")).await;
    assert_eq!(preflight.status(), StatusCode::OK);
    assert_cors(&preflight);
    assert!(body_bytes(preflight).await.is_empty());

    let missing = edge.fetch(request("POST", "/nope")).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["error"], "Not found");
}
