//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use glowmatch_core::{DatasetFormat, GlowConfig};
use glowmatch_server::{build_router, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const DATASET: &str = r#"[
  {"product_name": "Oil Control Gel", "brand_name": "ClearLab", "price_usd": 28.0,
   "ingredients": "Water, Niacinamide, Zinc PCA, Salicylic Acid",
   "combined_skin_type": "Oily Combination", "secondary_category": "Moisturizers",
   "loves_count": 5400, "image_link": "https://img.example/ocg.png"},
  {"product_name": "Mattifying Lotion", "brand_name": "ClearLab", "price_usd": 31.0,
   "ingredients": "Water, Niacinamide, Zinc PCA, Silica",
   "combined_skin_type": "Oily", "secondary_category": "Moisturizers",
   "loves_count": 12000, "image_link": "https://img.example/ml.png"},
  {"product_name": "Barrier Cream", "brand_name": "Dermaveil", "price_usd": 45.0,
   "ingredients": "Ceramides, Shea Butter, Squalane, Glycerin",
   "combined_skin_type": "Dry Normal", "secondary_category": "Moisturizers",
   "loves_count": 12000},
  {"product_name": "Rich Night Balm", "brand_name": "Dermaveil", "price_usd": 62.0,
   "ingredients": "Shea Butter, Squalane, Ceramides, Peptides",
   "combined_skin_type": "Dry", "secondary_category": "Night Creams",
   "loves_count": 800},
  {"product_name": "Gentle Foam", "brand_name": "Puremist", "price_usd": 18.0,
   "ingredients": "Water, Glycerin, Coco Glucoside",
   "combined_skin_type": "Sensitive Normal", "secondary_category": "Cleansers",
   "loves_count": 3000},
  {"product_name": "Clarifying Wash", "brand_name": "ClearLab", "price_usd": 22.0,
   "ingredients": "Water, Salicylic Acid, Coco Glucoside",
   "combined_skin_type": "Oily", "secondary_category": "Cleansers",
   "loves_count": 0}
]"#;

/// Writes the fixture dataset into `dir` and returns a matching configuration.
pub fn test_config(dir: &Path) -> GlowConfig {
    let dataset = dir.join("products.json");
    std::fs::write(&dataset, DATASET).expect("Failed to write dataset");
    let mut config = GlowConfig::default();
    config.catalog.dataset = dataset;
    config.catalog.format = DatasetFormat::Json;
    config.recommend.top_loved_count = 3;
    config
}

/// Builds state and router over the fixture catalog.
pub fn create_test_app(temp_dir: &TempDir) -> (Arc<AppState>, Router) {
    let config = test_config(temp_dir.path());
    let index = config.load_index().expect("Failed to build catalog");
    let state = Arc::new(AppState::new(index, config));
    (state.clone(), build_router(state))
}

/// Sends one request and returns status and parsed JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (axum::http::StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}
