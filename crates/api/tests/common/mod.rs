//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use airtrack_api::config::ServerConfig;
use airtrack_api::router::build_app_router;
use airtrack_api::state::AppState;
use airtrack_store::Store;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over a fresh, empty store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(Store::new()),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Send a GET request and return the response.
pub async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, path, body).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, path, body).await
}

/// Send a DELETE request and return the response.
pub async fn delete(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn send_json(app: &Router, method: Method, path: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
