use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::shortcode::{short_code, CODE_LEN};
use crate::common;

#[tokio::test]
async fn test_create_returns_code_as_plain_text() {
    let app = common::test_app();

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com%2Fa&ttl=60").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.content_type.starts_with("text/plain"), "{}", res.content_type);
    assert_eq!(res.body, short_code("https://example.com/a"));
    assert_eq!(res.body.len(), CODE_LEN);
}

#[tokio::test]
async fn test_create_without_ttl_uses_default() {
    let app = common::test_app();

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com%2Fb").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com%2Fc&ttl=").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_missing_url_is_bad_request() {
    let app = common::test_app();

    let res = common::post_form(&app, "ttl=60").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Missing source URL parameter");

    let res = common::post_form(&app, "fullUrl=&ttl=60").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Missing source URL parameter");
}

#[tokio::test]
async fn test_create_overlong_url_is_bad_request() {
    let app = common::test_app();
    let body = format!("fullUrl={}", "a".repeat(513));

    let res = common::post_form(&app, &body).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Source URL exceeds maximum length of 512 characters");
}

#[tokio::test]
async fn test_create_invalid_ttl_is_bad_request() {
    let app = common::test_app();

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com&ttl=soon").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.starts_with("Invalid TTL format: "), "{}", res.body);
}

#[tokio::test]
async fn test_create_unknown_source_format_is_accepted() {
    let app = common::test_app();

    let res = common::post_form(&app, "fullUrl=just%20some%20words").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, short_code("just some words"));
}

#[tokio::test]
async fn test_create_same_url_twice_is_conflict() {
    let app = common::test_app();

    let first = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = common::post_form(&app, "fullUrl=https%3A%2F%2Fexample.com").await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body, "Short link already exists");
}

#[tokio::test]
async fn test_create_when_store_full_is_rejected() {
    let app = common::test_app_with_capacity(1);

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Fone.example").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = common::post_form(&app, "fullUrl=https%3A%2F%2Ftwo.example").await;
    assert_eq!(res.status, StatusCode::INSUFFICIENT_STORAGE);
    assert_eq!(res.body, "Link store is full");
}

#[tokio::test]
async fn test_create_with_wrong_content_type_is_bad_request() {
    let app = common::test_app();

    let res = common::post_with_content_type(
        &app,
        "application/json",
        r#"{"fullUrl":"https://example.com"}"#,
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body.starts_with("Failed to parse form: "), "{}", res.body);
}
