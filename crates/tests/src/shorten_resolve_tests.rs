use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use crate::common;

#[tokio::test]
async fn test_resolve_returns_full_url() {
    let app = common::test_app();

    let created = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com%2Fpath%3Fq%3D1").await;
    assert_eq!(created.status, StatusCode::OK);

    let res = common::get(&app, &format!("/short?short={}", created.body)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.content_type.starts_with("text/plain"));
    assert_eq!(res.body, "https://example.com/path?q=1");
}

#[tokio::test]
async fn test_resolve_unknown_code_is_not_found() {
    let app = common::test_app();

    let res = common::get(&app, "/short?short=DoesNotExist").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Short link not found");
}

#[tokio::test]
async fn test_resolve_without_code_is_not_found() {
    let app = common::test_app();

    let res = common::get(&app, "/short").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "Short link not found");
}

#[tokio::test]
async fn test_resolve_is_isolated_per_store() {
    let first_app = common::test_app();
    let second_app = common::test_app();

    let created = common::post_form(&first_app, "fullUrl=https%3A%2F%2Fexample.com").await;
    assert_eq!(created.status, StatusCode::OK);

    let res = common::get(&second_app, &format!("/short?short={}", created.body)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
