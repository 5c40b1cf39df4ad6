//! Shared handler helpers.
//!
//! Keeps error bodies consistent across handlers.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use glowmatch_core::RecommendConfig;

use crate::types::ErrorResponse;

/// Handler error: status plus JSON body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build a 400 response carrying `message` verbatim.
pub fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Turn a rejected JSON body into the same error shape handlers use.
///
/// Keeps the rejection's status (400, 415 or 422).
pub fn json_rejection(rejection: &JsonRejection) -> ApiError {
    (
        rejection.status(),
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
}

/// Build an internal server error response without leaking implementation details.
///
/// The full error is logged server-side; the client only sees `context`.
pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(%context, error = %err, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("{context}: internal error"),
        }),
    )
}

/// Resolve the requested result count against the configured limits.
///
/// # Errors
///
/// Returns 400 if `requested` is zero or above `max_k`.
pub fn resolve_k(requested: Option<usize>, limits: &RecommendConfig) -> Result<usize, ApiError> {
    let k = requested.unwrap_or(limits.default_k);
    if k == 0 || k > limits.max_k {
        return Err(bad_request(format!(
            "k must be between 1 and {}, got {k}",
            limits.max_k
        )));
    }
    Ok(k)
}
