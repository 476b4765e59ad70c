use axum::Router;
use shared_types::{AppError, AppErrorKind, ShortenLinkForm};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the shortener API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::create_short_link,
        rest::resolve_short_link,
        health::health_check,
    ),
    components(schemas(
        ShortenLinkForm,
        AppError,
        AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "links", description = "Create and resolve short links"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the health check at `/health`, and the shortener at `/short`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
