pub mod short;

use axum::{routing::get, Router};
use crate::state::AppState;

pub use short::*;

/// Build the shortener REST router.
pub fn api_router() -> Router<AppState> {
    Router::new().route(
        shared_types::SHORTEN_PATH,
        get(short::resolve_short_link).post(short::create_short_link),
    )
}
