//! Form submission: post the shorten form and show the reply.
//!
//! Each submission issues exactly one request and writes exactly one result
//! into the output region. Submissions are independent: nothing serializes
//! them, so when several are in flight the one that resolves last decides
//! what the page shows.

use std::fmt;

use shared_types::{FormPayload, RESPONSE_NOT_OK, SHORTEN_PATH, SUBMIT_ERROR_PREFIX};

// ── Seams ───────────────────────────────────────────────────────────

/// A response whose status has arrived but whose body may not have.
#[allow(async_fn_in_trait)]
pub trait FormResponse {
    /// True for a 2xx status.
    fn is_success(&self) -> bool;

    fn status(&self) -> u16;

    /// Read the whole body as text.
    async fn text(self) -> Result<String, String>;
}

/// Issues URL-encoded form posts.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    type Response: FormResponse;

    /// POST `body` to `path` declaring `application/x-www-form-urlencoded`.
    /// `Err` carries the message of a transport-level failure.
    async fn post_form(&self, path: &str, body: String) -> Result<Self::Response, String>;
}

/// The page region a submission result is written into.
pub trait OutputRegion {
    /// Replace the region's text.
    fn set_text(&mut self, text: String);
}

// ── Errors ──────────────────────────────────────────────────────────

/// Why a submission produced no response text.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The server answered with a non-success status.
    NotOk { status: u16 },
    /// No well-formed response was obtained.
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotOk { .. } => f.write_str(RESPONSE_NOT_OK),
            SubmitError::Transport(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── Handler ─────────────────────────────────────────────────────────

/// Post `body` to the shorten endpoint and return the response text.
///
/// The body is not read when the status is not a success.
pub async fn post_shorten<T: FormTransport>(
    transport: &T,
    body: String,
) -> Result<String, SubmitError> {
    let response = transport
        .post_form(SHORTEN_PATH, body)
        .await
        .map_err(SubmitError::Transport)?;

    if !response.is_success() {
        return Err(SubmitError::NotOk {
            status: response.status(),
        });
    }

    response.text().await.map_err(SubmitError::Transport)
}

/// Text shown in the output region for a submission outcome.
pub fn render_outcome(outcome: &Result<String, SubmitError>) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(e) => format!("{SUBMIT_ERROR_PREFIX}{e}"),
    }
}

/// Submit a form payload and write the outcome into `output`.
///
/// The payload is encoded before the first await, so the request carries
/// the fields as they were when the submission started. Failures are
/// logged and shown, never returned.
pub async fn submit_form<T, O>(transport: &T, payload: &FormPayload, mut output: O)
where
    T: FormTransport,
    O: OutputRegion,
{
    let body = payload.encode();
    let outcome = post_shorten(transport, body).await;

    match &outcome {
        Ok(text) => tracing::info!(response = %text, "Form submitted"),
        Err(SubmitError::NotOk { status }) => {
            tracing::error!(status, "There was a problem with the fetch operation: {RESPONSE_NOT_OK}")
        }
        Err(SubmitError::Transport(message)) => {
            tracing::error!("There was a problem with the fetch operation: {message}")
        }
    }

    output.set_text(render_outcome(&outcome));
}
