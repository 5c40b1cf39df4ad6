#![allow(clippy::doc_markdown)]
//! glowmatch Server library.
//!
//! Router, shared state and OpenAPI document for the REST API. The binary in
//! `main.rs` adds configuration, logging and the listener.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::{
    routing::{get, post},
    Json, Router,
};
use glowmatch_core::{CatalogIndex, GlowConfig};
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod args;
pub mod handlers;
pub mod types;

pub use args::ServerArgs;
pub use handlers::{health_check, recommend_products, reload_catalog, top_loved_products};
pub use types::{
    ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, RecommendationResponse,
    ReloadResponse, TopLovedResponse,
};

/// Application state shared across handlers.
///
/// The catalog sits behind an [`ArcSwap`]: handlers take a snapshot with
/// `load`/`load_full` and a reload replaces it atomically. Reloads themselves
/// run one at a time under `reload_lock`.
pub struct AppState {
    /// Active catalog
    pub catalog: ArcSwap<CatalogIndex>,
    /// Effective configuration
    pub config: GlowConfig,
    /// Held for the duration of a catalog reload
    pub reload_lock: Mutex<()>,
}

impl AppState {
    /// Creates state serving `index`.
    #[must_use]
    pub fn new(index: CatalogIndex, config: GlowConfig) -> Self {
        Self {
            catalog: ArcSwap::from_pointee(index),
            config,
            reload_lock: Mutex::new(()),
        }
    }
}

/// OpenAPI documentation for the glowmatch REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "glowmatch API",
        description = "Content-based skincare product recommendations",
        license(name = "Apache-2.0")
    ),
    paths(
        handlers::health::health_check,
        handlers::top_loved::top_loved_products,
        handlers::recommend::recommend_products,
        handlers::catalog::reload_catalog,
    ),
    components(schemas(
        ErrorResponse,
        HealthResponse,
        RecommendRequest,
        RecommendResponse,
        RecommendationResponse,
        TopLovedResponse,
        ReloadResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "recommendations", description = "Similar and matching products"),
        (name = "catalog", description = "Catalog lifecycle")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the CORS layer from configured origins.
///
/// An empty list is permissive.
#[must_use]
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        tracing::warn!("CORS: permissive (dev mode). Set server.cors_origins to restrict origins.");
        return CorsLayer::permissive();
    }
    let origin_list: Vec<_> = origins
        .iter()
        .filter_map(|o| o.trim().parse().ok())
        .collect();
    tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin_list))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.config.server.cors_origins);
    Router::new()
        .route("/health", get(health_check))
        .route("/api/top_loved_products", get(top_loved_products))
        .route("/api/recommend_products", post(recommend_products))
        .route("/api/catalog/reload", post(reload_catalog))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
