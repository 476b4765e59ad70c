use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::{ServiceConfig, FORM_CONTENT_TYPE};
use tower::ServiceExt;

/// Build a router over a fresh in-memory store holding at most `capacity` links.
pub fn test_app_with_capacity(capacity: usize) -> Router {
    let config = ServiceConfig {
        count: capacity,
        ..ServiceConfig::default()
    };
    server::openapi::api_router(server::state::AppState::in_memory(config))
}

/// Build a router over a fresh in-memory store with the default capacity.
pub fn test_app() -> Router {
    test_app_with_capacity(ServiceConfig::default().count)
}

/// Response status, `Content-Type` header and body text.
pub struct TextResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

/// POST a URL-encoded form body to `/short`.
pub async fn post_form(app: &Router, body: &str) -> TextResponse {
    let req = Request::builder()
        .method("POST")
        .uri("/short")
        .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// POST to `/short` with an arbitrary content type.
pub async fn post_with_content_type(app: &Router, content_type: &str, body: &str) -> TextResponse {
    let req = Request::builder()
        .method("POST")
        .uri("/short")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> TextResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// GET a route and parse the body as JSON.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let json = serde_json::from_str(&response.body).unwrap_or(Value::Null);
    (response.status, json)
}

/// Send a request through the router and collect the response.
async fn send(app: &Router, req: Request<Body>) -> TextResponse {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    TextResponse {
        status,
        content_type,
        body: String::from_utf8_lossy(&body_bytes).into_owned(),
    }
}

/// Serve a fresh app on an ephemeral local port. Returns the base URL.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    let app = test_app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{addr}")
}
