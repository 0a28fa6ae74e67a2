//! Integration tests for the web demo routes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use boxing_web::handlers::{create_router, BodyResponse, GreetingResponse};
use std::time::Duration;
use tower::ServiceExt; // for oneshot

async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_hello_endpoint() {
    let (status, greeting): (_, GreetingResponse) = get_json(create_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(greeting.response, "Hello, World!");
    assert_eq!(greeting.status, 200);
}

#[tokio::test]
async fn test_repeat_echoes_input() {
    let (status, echo): (_, BodyResponse) =
        get_json(create_router(), "/repeat?input=jab%20cross").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo.body.as_deref(), Some("jab cross"));
}

#[tokio::test]
async fn test_repeat_without_input_is_null() {
    let request = Request::builder()
        .uri("/repeat")
        .body(Body::empty())
        .unwrap();

    let response = create_router().oneshot(request).await.unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json["body"].is_null());
    assert_eq!(json["status"], 200);
}

#[tokio::test]
async fn test_health_aliases() {
    for uri in ["/health", "/healthcheck"] {
        let (status, health): (_, BodyResponse) = get_json(create_router(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.body.as_deref(), Some("OK"));
        assert_eq!(health.status, 200);
    }
}

#[tokio::test]
async fn test_hang_never_responds() {
    let request = Request::builder()
        .uri("/hang")
        .body(Body::empty())
        .unwrap();

    let pending = create_router().oneshot(request);
    let result = tokio::time::timeout(Duration::from_millis(200), pending).await;

    assert!(result.is_err(), "/hang should not produce a response");
}
