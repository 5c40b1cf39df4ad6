//! Request and response bodies for the REST API.

use glowmatch_core::{Recommendation, TopLovedEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body of every non-2xx handler response, rejected JSON bodies included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

/// Health check body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the server answers
    pub status: String,
    /// Products in the active catalog
    pub products: usize,
}

/// Recommendation request.
///
/// Either `product_name`, or both `skin_type` and `secondary_category`.
/// A product name wins when both shapes are present.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct RecommendRequest {
    /// Exact catalog product name
    #[serde(default)]
    pub product_name: Option<String>,
    /// Skin type, e.g. "Oily"
    #[serde(default)]
    pub skin_type: Option<String>,
    /// Secondary category, e.g. "Moisturizers"
    #[serde(default)]
    pub secondary_category: Option<String>,
    /// Number of results; defaults to the configured `default_k`
    #[serde(default)]
    pub k: Option<usize>,
}

/// One recommended product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    /// Product name
    pub product_name: String,
    /// Ingredient list
    pub ingredients: String,
    /// Skin-type tags
    pub combined_skin_type: String,
    /// Brand
    pub brand_name: String,
    /// Price in USD
    pub price_usd: f64,
    /// Cosine similarity that placed the product
    pub score: f32,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            product_name: r.product_name,
            ingredients: r.ingredients,
            combined_skin_type: r.combined_skin_type,
            brand_name: r.brand_name,
            price_usd: r.price_usd,
            score: r.score,
        }
    }
}

/// Recommendation results.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    /// Best matches first
    pub recommendations: Vec<RecommendationResponse>,
}

/// One entry of the top-loved listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopLovedResponse {
    /// Product name
    pub product_name: String,
    /// Image URL
    pub image_link: String,
    /// Brand
    pub brand_name: String,
    /// Price in USD
    pub price_usd: f64,
    /// Number of users who loved the product
    pub loves_count: u64,
}

impl From<TopLovedEntry> for TopLovedResponse {
    fn from(e: TopLovedEntry) -> Self {
        Self {
            product_name: e.product_name,
            image_link: e.image_link,
            brand_name: e.brand_name,
            price_usd: e.price_usd,
            loves_count: e.loves_count,
        }
    }
}

/// Result of a catalog reload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReloadResponse {
    /// Products in the new catalog
    pub products: usize,
    /// Vocabulary size of the new catalog
    pub vocabulary: usize,
}
