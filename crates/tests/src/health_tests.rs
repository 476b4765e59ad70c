use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use crate::common;

#[tokio::test]
async fn test_health_reports_live_links() {
    let app = common::test_app();

    let (status, body) = common::get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["links"], 0);

    common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com").await;

    let (_, body) = common::get_json(&app, "/health").await;
    assert_eq!(body["links"], 1);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_docs_are_served() {
    let app = common::test_app();

    let res = common::get(&app, "/docs").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.content_type.starts_with("text/html"));
}
