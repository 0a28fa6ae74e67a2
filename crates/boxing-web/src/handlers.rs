//! HTTP request handlers for the web demo.
//!
//! Greeting, echo, health and hang routes returning small JSON bodies, using axum.

use axum::{extract::Query, response::Json, routing::get, Router as AxumRouter};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Body of the `/` route
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    /// Greeting text
    pub response: String,
    /// HTTP status echoed in the body
    pub status: u16,
}

/// Body of the `/repeat` and health routes
#[derive(Debug, Serialize, Deserialize)]
pub struct BodyResponse {
    /// Echoed payload, `null` when absent
    pub body: Option<String>,
    /// HTTP status echoed in the body
    pub status: u16,
}

/// Query parameters for `/repeat`
#[derive(Debug, Deserialize)]
pub struct RepeatParams {
    /// Text to echo back
    pub input: Option<String>,
}

/// GET / - Greeting
async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        response: "Hello, World!".to_string(),
        status: 200,
    })
}

/// GET /repeat?input=... - Echo the input
async fn repeat(Query(params): Query<RepeatParams>) -> Json<BodyResponse> {
    info!("Repeating input: {:?}", params.input);
    Json(BodyResponse {
        body: params.input,
        status: 200,
    })
}

/// GET /health and /healthcheck - Liveness check
async fn health() -> Json<BodyResponse> {
    Json(BodyResponse {
        body: Some("OK".to_string()),
        status: 200,
    })
}

/// GET /hang - Never responds
///
/// The request task parks forever without occupying a worker thread.
async fn hang() -> Json<GreetingResponse> {
    warn!("Received request to /hang, this request will never complete");
    std::future::pending().await
}

/// Create the axum router with all routes
pub fn create_router() -> AxumRouter {
    AxumRouter::new()
        .route("/", get(hello))
        .route("/repeat", get(repeat))
        .route("/health", get(health))
        .route("/healthcheck", get(health))
        .route("/hang", get(hang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt; // for oneshot

    #[tokio::test]
    async fn test_hello() {
        let app = create_router();

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_router();

        let request = Request::builder()
            .uri("/fight")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
