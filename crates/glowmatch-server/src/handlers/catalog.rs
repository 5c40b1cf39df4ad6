//! Catalog reload handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::{ErrorResponse, ReloadResponse};
use crate::AppState;

use super::helpers::internal_error;

/// Rebuild the catalog from its configured source and swap it in.
///
/// Requests already running keep the catalog they started with. On failure
/// the previous catalog stays active. A reload that arrives while another is
/// still rebuilding is refused with 409.
#[utoipa::path(
    post,
    path = "/api/catalog/reload",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog rebuilt and swapped", body = ReloadResponse),
        (status = 409, description = "Another reload is in progress", body = ErrorResponse),
        (status = 500, description = "Rebuild failed, previous catalog kept", body = ErrorResponse)
    )
)]
pub async fn reload_catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let Ok(_guard) = state.reload_lock.try_lock() else {
        tracing::warn!("Catalog reload refused, another reload is running");
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Catalog reload already in progress".to_string(),
            }),
        )
            .into_response();
    };

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || config.load_index()).await;

    match result {
        Ok(Ok(index)) => {
            let body = ReloadResponse {
                products: index.len(),
                vocabulary: index.vocabulary_size(),
            };
            state.catalog.store(Arc::new(index));
            tracing::info!(products = body.products, "Catalog reloaded");
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(Err(e)) => internal_error("Catalog reload", &e).into_response(),
        Err(e) => internal_error("Catalog reload", &e).into_response(),
    }
}
