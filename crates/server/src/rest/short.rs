use axum::{
    extract::{rejection::FormRejection, Query, State},
    Form,
};
use std::sync::Arc;

use shared_types::{parse_ttl, validate_source_url, AppError, ShortLinkQuery, ShortenLinkForm};

use crate::shortcode::short_code;
use crate::source_kind::classify;
use crate::store::LinkStore;

// ── Create ──────────────────────────────────────────────────────────

/// POST /short
///
/// Accepts the shorten form (`fullUrl`, optional `ttl` in seconds) and
/// replies with the short code as plain text.
#[utoipa::path(
    post,
    path = "/short",
    request_body(content = ShortenLinkForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Short code", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or invalid field", body = String, content_type = "text/plain"),
        (status = 409, description = "Short link already exists", body = String, content_type = "text/plain"),
        (status = 507, description = "Link store is full", body = String, content_type = "text/plain")
    ),
    tag = "links"
)]
#[tracing::instrument(skip_all)]
pub async fn create_short_link(
    State(store): State<Arc<dyn LinkStore>>,
    form: Result<Form<ShortenLinkForm>, FormRejection>,
) -> Result<String, AppError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Form parse error");
        AppError::bad_request(format!("Failed to parse form: {}", rejection.body_text()))
    })?;

    validate_source_url(&form.full_url)?;
    let ttl = parse_ttl(&form.ttl)?;

    match classify(&form.full_url) {
        Some(kind) => tracing::debug!(%kind, "Classified source"),
        None => tracing::debug!(input = %form.full_url, "Unknown source format"),
    }

    let code = short_code(&form.full_url);
    store.insert_new(&code, &form.full_url, ttl)?;

    tracing::info!(code = %code, ttl_secs = ttl.as_secs(), "Short link created");
    Ok(code)
}

// ── Resolve ─────────────────────────────────────────────────────────

/// GET /short?short={code}
#[utoipa::path(
    get,
    path = "/short",
    params(ShortLinkQuery),
    responses(
        (status = 200, description = "Source URL", body = String, content_type = "text/plain"),
        (status = 404, description = "Short link not found", body = String, content_type = "text/plain")
    ),
    tag = "links"
)]
pub async fn resolve_short_link(
    State(store): State<Arc<dyn LinkStore>>,
    Query(query): Query<ShortLinkQuery>,
) -> Result<String, AppError> {
    store
        .get(&query.short)?
        .ok_or_else(|| AppError::not_found("Short link not found"))
}
