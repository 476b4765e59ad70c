use dioxus::prelude::*;
use shared_types::FORM_CONTENT_TYPE;

use crate::submit::{FormResponse, FormTransport, OutputRegion};

/// Base URL the shorten form posts against.
///
/// In the browser this is the page's own origin, so the fixed relative
/// endpoint resolves against whichever host served the page. Native
/// builds read `SHORTENER_BASE_URL`.
pub fn base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    option_env!("SHORTENER_BASE_URL")
        .map(str::to_string)
        .or_else(|| std::env::var("SHORTENER_BASE_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_string())
}

/// Form transport backed by `reqwest` (the browser's `fetch` on wasm).
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Transport for the current page (see [`base_url`]).
    pub fn for_page() -> Self {
        Self::new(base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Display text of the innermost error in `err`'s source chain.
///
/// reqwest's own message only names the request; the cause underneath
/// says what went wrong ("Connection refused", the fetch `TypeError`).
fn root_cause_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

impl FormResponse for reqwest::Response {
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn text(self) -> Result<String, String> {
        reqwest::Response::text(self)
            .await
            .map_err(|e| root_cause_message(&e))
    }
}

impl FormTransport for HttpTransport {
    type Response = reqwest::Response;

    async fn post_form(&self, path: &str, body: String) -> Result<reqwest::Response, String> {
        self.client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| root_cause_message(&e))
    }
}

impl OutputRegion for Signal<String> {
    fn set_text(&mut self, text: String) {
        self.set(text);
    }
}
