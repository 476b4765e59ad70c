use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::AppError;

/// Longest source URL the service accepts.
pub const MAX_SOURCE_URL_LEN: usize = 512;

/// Lifetime applied when the form leaves the TTL field empty.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Query string of `GET /short`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ShortLinkQuery {
    /// Short code returned by `POST /short`.
    #[serde(default)]
    pub short: String,
}

/// Check the source URL field: present and no longer than
/// [`MAX_SOURCE_URL_LEN`] bytes of UTF-8.
pub fn validate_source_url(full_url: &str) -> Result<(), AppError> {
    if full_url.is_empty() {
        return Err(AppError::bad_request("Missing source URL parameter"));
    }
    if full_url.len() > MAX_SOURCE_URL_LEN {
        return Err(AppError::bad_request(format!(
            "Source URL exceeds maximum length of {MAX_SOURCE_URL_LEN} characters"
        )));
    }
    Ok(())
}

/// Parse the TTL field as a whole number of seconds.
///
/// An empty (or all-whitespace) field yields [`DEFAULT_TTL_SECS`]. Zero is
/// rejected since the link would expire before it could be used.
pub fn parse_ttl(raw: &str) -> Result<Duration, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Duration::from_secs(DEFAULT_TTL_SECS));
    }
    match raw.parse::<u64>() {
        Ok(0) => Err(AppError::bad_request(
            "Invalid TTL format: must be greater than zero",
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(AppError::bad_request(format!("Invalid TTL format: {e}"))),
    }
}
