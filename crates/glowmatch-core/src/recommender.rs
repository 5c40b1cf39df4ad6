//! Query logic over a [`CatalogIndex`].
//!
//! Two query modes:
//! - **By product**: the precomputed similarity row of a named product,
//!   with the product itself left out.
//! - **By attributes**: a synthetic `"{skin_type} {category}"` document
//!   vectorized through the frozen vocabulary and scored against every product.
//!
//! Both return at most `k` [`Recommendation`]s ordered by score descending,
//! ties by catalog index ascending. Queries are pure reads; a `Recommender`
//! can be cloned and shared across threads freely.

use std::sync::Arc;

use crate::catalog::CatalogIndex;
use crate::error::{Error, Result};
use crate::product::Recommendation;
use crate::ranking::{top_k, ScoredIndex};

/// Default number of recommendations per query.
pub const DEFAULT_K: usize = 5;

/// Default length of the top-loved listing.
pub const DEFAULT_TOP_LOVED: usize = 10;

/// Message returned when neither query shape is complete.
pub const MISSING_QUERY_MESSAGE: &str =
    "Please provide either a product name or both skin type and category.";

/// A resolved recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Products similar to a catalog product.
    ByProduct {
        /// Exact product name
        name: String,
    },
    /// Products matching a skin type and category.
    ByAttributes {
        /// Skin type, e.g. "Oily"
        skin_type: String,
        /// Secondary category, e.g. "Moisturizers"
        category: String,
    },
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Query {
    /// Resolves loosely-filled request fields into a query.
    ///
    /// A non-blank product name takes precedence; otherwise both skin type
    /// and category must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if neither shape is complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use glowmatch_core::Query;
    ///
    /// let q = Query::from_parts(None, Some("Oily"), Some("Moisturizers")).unwrap();
    /// assert!(matches!(q, Query::ByAttributes { .. }));
    /// assert!(Query::from_parts(Some(" "), Some("Oily"), None).is_err());
    /// ```
    pub fn from_parts(
        product_name: Option<&str>,
        skin_type: Option<&str>,
        category: Option<&str>,
    ) -> Result<Self> {
        if let Some(name) = non_blank(product_name) {
            return Ok(Query::ByProduct {
                name: name.to_string(),
            });
        }
        match (non_blank(skin_type), non_blank(category)) {
            (Some(skin_type), Some(category)) => Ok(Query::ByAttributes {
                skin_type: skin_type.to_string(),
                category: category.to_string(),
            }),
            _ => Err(Error::InvalidQuery(MISSING_QUERY_MESSAGE.to_string())),
        }
    }
}

/// Stateless recommendation engine bound to one catalog.
#[derive(Debug, Clone)]
pub struct Recommender {
    index: Arc<CatalogIndex>,
}

impl Recommender {
    /// Creates a recommender over `index`.
    #[must_use]
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }

    /// The catalog this recommender reads.
    #[must_use]
    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Runs a resolved query.
    ///
    /// # Errors
    ///
    /// Same as the mode-specific methods.
    pub fn recommend(&self, query: &Query, k: usize) -> Result<Vec<Recommendation>> {
        match query {
            Query::ByProduct { name } => self.recommend_by_product(name, k),
            Query::ByAttributes {
                skin_type,
                category,
            } => self.recommend_by_attributes(skin_type, category, k),
        }
    }

    /// Up to `k` products most similar to the product named `name`.
    ///
    /// The named product never appears in its own results, so the list holds
    /// `min(k, N - 1)` entries. An unknown name yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if `name` is blank or `k` is zero.
    pub fn recommend_by_product(&self, name: &str, k: usize) -> Result<Vec<Recommendation>> {
        if name.trim().is_empty() {
            return Err(Error::InvalidQuery(
                "product name must not be blank".to_string(),
            ));
        }
        validate_k(k)?;

        let idx = match self.index.index_of(name) {
            Ok(idx) => idx,
            Err(Error::NotFound(_)) => {
                tracing::debug!(
                    product = name,
                    "Unknown product, returning no recommendations"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let row = self.index.similarity_row(idx)?;
        let ranked = top_k(row, k, Some(idx));
        tracing::debug!(
            product = name,
            k,
            returned = ranked.len(),
            "Recommended by product"
        );
        Ok(self.project(&ranked))
    }

    /// Up to `k` products best matching `skin_type` and `category`.
    ///
    /// Always returns `min(k, N)` entries, even when no product mentions
    /// either term: scores are then all zero and catalog order decides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if either input is blank or `k` is zero.
    pub fn recommend_by_attributes(
        &self,
        skin_type: &str,
        category: &str,
        k: usize,
    ) -> Result<Vec<Recommendation>> {
        if skin_type.trim().is_empty() {
            return Err(Error::InvalidQuery("skin type must not be blank".to_string()));
        }
        if category.trim().is_empty() {
            return Err(Error::InvalidQuery("category must not be blank".to_string()));
        }
        validate_k(k)?;

        let query = format!("{skin_type} {category}");
        let vector = self.index.vectorize(&query);
        let scores = self.index.similarity_against_all(&vector)?;
        let ranked = top_k(&scores, k, None);
        tracing::debug!(
            skin_type,
            category,
            k,
            matched_terms = vector.nnz(),
            "Recommended by attributes"
        );
        Ok(self.project(&ranked))
    }

    fn project(&self, ranked: &[ScoredIndex]) -> Vec<Recommendation> {
        ranked
            .iter()
            .filter_map(|s| {
                self.index
                    .product(s.index)
                    .map(|p| p.to_recommendation(s.score))
            })
            .collect()
    }
}

fn validate_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidQuery("k must be at least 1".to_string()));
    }
    Ok(())
}
