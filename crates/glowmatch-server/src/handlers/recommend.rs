//! Recommendation handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use glowmatch_core::{Query, Recommender};

use crate::types::{ErrorResponse, RecommendRequest, RecommendResponse, RecommendationResponse};
use crate::AppState;

use super::helpers::{bad_request, internal_error, json_rejection, resolve_k};

/// Recommend products similar to a named product, or matching a skin type
/// and category.
#[utoipa::path(
    post,
    path = "/api/recommend_products",
    tag = "recommendations",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Recommendations, best first", body = RecommendResponse),
        (status = 400, description = "Incomplete query, k out of range or malformed JSON", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
        (status = 422, description = "JSON does not match the request shape", body = ErrorResponse)
    )
)]
pub async fn recommend_products(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(&rejection).into_response(),
    };
    let query = match Query::from_parts(
        req.product_name.as_deref(),
        req.skin_type.as_deref(),
        req.secondary_category.as_deref(),
    ) {
        Ok(q) => q,
        Err(e) => return bad_request(query_message(e)).into_response(),
    };
    let k = match resolve_k(req.k, &state.config.recommend) {
        Ok(k) => k,
        Err(e) => return e.into_response(),
    };

    let recommender = Recommender::new(state.catalog.load_full());
    let result = tokio::task::spawn_blocking(move || recommender.recommend(&query, k)).await;

    match result {
        Ok(Ok(recommendations)) => (
            StatusCode::OK,
            Json(RecommendResponse {
                recommendations: recommendations
                    .into_iter()
                    .map(RecommendationResponse::from)
                    .collect(),
            }),
        )
            .into_response(),
        Ok(Err(e)) if e.is_invalid_query() => bad_request(query_message(e)).into_response(),
        Ok(Err(e)) => internal_error("Recommend", &e).into_response(),
        Err(e) => internal_error("Recommend", &e).into_response(),
    }
}

fn query_message(err: glowmatch_core::Error) -> String {
    match err {
        glowmatch_core::Error::InvalidQuery(message) => message,
        other => other.to_string(),
    }
}
