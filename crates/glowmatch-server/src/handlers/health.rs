//! Health check handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::types::HealthResponse;
use crate::AppState;

/// Liveness probe with the active catalog size.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        products: state.catalog.load().len(),
    })
}
