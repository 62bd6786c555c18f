//! Router tests for the handlers that need no live provider.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use tower::ServiceExt;

use trivia_config::TriviaConfig;
use trivia_server::{AppState, build_router};

fn router() -> axum::Router {
    // Default config: no OpenAI key, no Supabase -> similarity disabled.
    build_router(AppState::new(TriviaConfig::default()))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn health_answers_ok() {
    let response = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn game_rules_exposes_session_constants() {
    let response = router()
        .oneshot(Request::get("/game-rules").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalQuestions"], 15);
    assert_eq!(json["requiredScore"], 14);
    assert_eq!(json["defaultHints"], 3);
}

#[tokio::test]
async fn similarity_without_store_is_a_uniform_error_body() {
    let request = Request::post("/check-similarity")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{ "question": "Is water wet?" }"#))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
    assert!(json.get("isSimilar").is_none(), "no partial data on error");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = router()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_question_rejects_non_json_payload() {
    let request = Request::post("/generate-question")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("topic=astronomy"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
