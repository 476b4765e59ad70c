//! Drive the service over real HTTP the way the browser form does: a
//! URL-encoded POST to `/short`, with the reply read as text.

use pretty_assertions::assert_eq;
use server::shortcode::short_code;
use shared_types::{ShortenLinkForm, FORM_CONTENT_TYPE, SHORTEN_PATH};
use crate::common;

async fn submit(base: &str, form: &ShortenLinkForm) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}{SHORTEN_PATH}"))
        .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(form.to_payload().encode())
        .send()
        .await
        .expect("request failed")
}

#[tokio::test]
async fn test_encoded_form_is_accepted_by_service() {
    let base = common::spawn_server().await;
    let form = ShortenLinkForm::new("https://example.com/a b?x=1&y=2", "120");

    let res = submit(&base, &form).await;
    assert!(res.status().is_success());
    assert_eq!(res.text().await.unwrap(), short_code("https://example.com/a b?x=1&y=2"));
}

#[tokio::test]
async fn test_empty_ttl_field_is_accepted_by_service() {
    let base = common::spawn_server().await;
    let form = ShortenLinkForm::new("https://example.com/empty-ttl", "");

    let res = submit(&base, &form).await;
    assert!(res.status().is_success());
}

#[tokio::test]
async fn test_rejected_form_has_non_success_status() {
    let base = common::spawn_server().await;
    let form = ShortenLinkForm::new("", "");

    let res = submit(&base, &form).await;
    assert_eq!(res.status().as_u16(), 400);
    assert_eq!(res.text().await.unwrap(), "Missing source URL parameter");
}
