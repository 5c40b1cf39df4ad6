//! # glowmatch core
//!
//! Content-based recommendation engine for skincare catalogs.
//!
//! Each product is described by one document built from its ingredients,
//! combined skin type and secondary category. Documents are weighted with
//! TF-IDF, every pair of products is scored with cosine similarity once at
//! build time, and queries rank products against that matrix.
//!
//! Two kinds of query are supported:
//!
//! - **By product**: the `k` products most similar to a named product,
//!   never including the product itself.
//! - **By attributes**: a skin type and category are vectorized with the
//!   catalog's vocabulary and scored against every product.
//!
//! A popularity listing (products ordered by loves count) is kept alongside.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use glowmatch_core::{CatalogIndex, Query, RawProduct, Recommender};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = vec![
//!         RawProduct::new("Hydra Gel", "Water, Glycerin, Niacinamide", "Oily", "Moisturizers"),
//!         RawProduct::new("Matte Fluid", "Water, Niacinamide, Silica", "Oily", "Moisturizers"),
//!         RawProduct::new("Night Balm", "Shea Butter, Ceramides", "Dry", "Night Creams"),
//!     ];
//!     let index = CatalogIndex::build(records)?;
//!     let recommender = Recommender::new(Arc::new(index));
//!
//!     let similar = recommender.recommend(&Query::from_parts(Some("Hydra Gel"), None, None)?, 2)?;
//!     assert_eq!(similar[0].product_name, "Matte Fluid");
//!
//!     let query = Query::from_parts(None, Some("Dry"), Some("Night Creams"))?;
//!     let matched = recommender.recommend(&query, 1)?;
//!     assert_eq!(matched[0].product_name, "Night Balm");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::cast_precision_loss
    )
)]

pub mod catalog;
#[cfg(test)]
mod catalog_tests;
pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod loader;
#[cfg(test)]
mod loader_tests;
pub mod product;
pub mod ranking;
pub mod recommender;
pub mod similarity;
pub mod snapshot;
#[cfg(test)]
mod test_fixtures;
pub mod vectorizer;

pub use catalog::CatalogIndex;
pub use config::{
    CatalogConfig, GlowConfig, LoggingConfig, RecommendConfig, ServerConfig,
    DEFAULT_CONFIG_FILE,
};
pub use error::{BuildError, Error, Result};
pub use loader::{load_products, DatasetFormat};
pub use product::{Product, RawProduct, Recommendation, TopLovedEntry};
pub use ranking::ScoredIndex;
pub use recommender::{Query, Recommender, DEFAULT_K, DEFAULT_TOP_LOVED, MISSING_QUERY_MESSAGE};
pub use similarity::{cosine_similarity, SimilarityMatrix, SparseVector};
pub use vectorizer::{TfidfVectorizer, VectorizerParams};
