//! Top-loved products handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::types::TopLovedResponse;
use crate::AppState;

/// Most-loved products, highest loves count first.
#[utoipa::path(
    get,
    path = "/api/top_loved_products",
    tag = "recommendations",
    responses(
        (status = 200, description = "Most-loved products", body = [TopLovedResponse])
    )
)]
pub async fn top_loved_products(State(state): State<Arc<AppState>>) -> Json<Vec<TopLovedResponse>> {
    let count = state.config.recommend.top_loved_count;
    let entries = state.catalog.load().top_loved(count);
    Json(entries.into_iter().map(TopLovedResponse::from).collect())
}
