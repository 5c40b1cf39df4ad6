//! Immutable catalog index.
//!
//! Owns the product sequence, the fitted [`TfidfVectorizer`], one document
//! vector per product and the pairwise [`SimilarityMatrix`]. Positional index
//! `i` refers to the same product in every one of these structures.
//!
//! A built index has no mutating methods; share it behind an `Arc` across any
//! number of readers.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Error, Result};
use crate::product::{Product, RawProduct, TopLovedEntry};
use crate::similarity::{cosine_similarity, SimilarityMatrix, SparseVector};
use crate::vectorizer::{TfidfVectorizer, VectorizerParams};

/// Products, text vectors and similarity matrix built from one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIndex {
    products: Vec<Product>,
    vectorizer: TfidfVectorizer,
    vectors: Vec<SparseVector>,
    matrix: SimilarityMatrix,
    /// Catalog positions ordered by loves count descending
    top_loved: Vec<usize>,
    /// Rebuilt from `products` on deserialization
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Builds an index with default TF-IDF weighting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if `records` is empty, a record lacks a
    /// required text field, two records share a name, or no document
    /// yields a term.
    pub fn build(records: Vec<RawProduct>) -> Result<Self> {
        Self::build_with(records, VectorizerParams::default())
    }

    /// Builds an index with the given TF-IDF weighting.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build`].
    pub fn build_with(records: Vec<RawProduct>, params: VectorizerParams) -> Result<Self> {
        let start = Instant::now();
        if records.is_empty() {
            return Err(BuildError::EmptyCatalog.into());
        }

        let products = records
            .into_iter()
            .enumerate()
            .map(|(row, raw)| Product::from_raw(row, raw))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let by_name = name_map(&products)?;

        let documents: Vec<String> = products.iter().map(Product::document).collect();
        let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&documents, params)?;
        let matrix = SimilarityMatrix::compute(&vectors);
        let top_loved = popularity_order(&products);

        tracing::info!(
            products = products.len(),
            terms = vectorizer.vocabulary_size(),
            elapsed = ?start.elapsed(),
            "Catalog index built"
        );

        Ok(Self {
            products,
            vectorizer,
            vectors,
            matrix,
            top_loved,
            by_name,
        })
    }

    /// Restores the name lookup after deserialization and checks that the
    /// parallel structures agree, so a decoded index cannot index out of
    /// bounds at query time.
    pub(crate) fn rehydrate(mut self) -> Result<Self> {
        let n = self.products.len();
        if n == 0 {
            return Err(BuildError::EmptyCatalog.into());
        }
        if self.vectors.len() != n || self.matrix.len() != n || self.top_loved.len() != n {
            return Err(Error::Snapshot(format!(
                "inconsistent catalog: {n} products, {} vectors, {}x{} matrix, {} ranked",
                self.vectors.len(),
                self.matrix.len(),
                self.matrix.len(),
                self.top_loved.len()
            )));
        }
        if !self.matrix.is_well_formed() {
            return Err(Error::Snapshot(format!(
                "similarity matrix does not hold {n}x{n} cells"
            )));
        }
        if !self.vectorizer.is_well_formed() {
            return Err(Error::Snapshot(
                "vectorizer vocabulary references missing IDF weights".to_string(),
            ));
        }
        let vocab = self.vectorizer.vocabulary_size();
        if let Some(bad) = self.vectors.iter().position(|v| {
            !v.is_well_formed() || v.max_index().is_some_and(|id| id as usize >= vocab)
        }) {
            return Err(Error::Snapshot(format!(
                "document vector {bad} is malformed or outside the {vocab}-term vocabulary"
            )));
        }
        if let Some(&bad) = self.top_loved.iter().find(|&&i| i >= n) {
            return Err(Error::Snapshot(format!(
                "popularity ranking references product {bad} of {n}"
            )));
        }
        self.by_name = name_map(&self.products)?;
        Ok(self)
    }

    /// Replaces the computed similarity matrix with one prepared offline.
    ///
    /// The attribute query path keeps using the document vectors, so only
    /// by-product recommendations are affected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `matrix` is not N×N.
    pub fn with_precomputed_matrix(mut self, matrix: SimilarityMatrix) -> Result<Self> {
        if matrix.len() != self.products.len() {
            return Err(Error::DimensionMismatch {
                expected: self.products.len(),
                actual: matrix.len(),
            });
        }
        self.matrix = matrix;
        Ok(self)
    }

    /// Positional index of the product named exactly `name` (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no product has that name.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Maps `text` into the catalog's frozen vector space.
    #[must_use]
    pub fn vectorize(&self, text: &str) -> SparseVector {
        self.vectorizer.transform(text)
    }

    /// Precomputed similarity of product `index` to every product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn similarity_row(&self, index: usize) -> Result<&[f32]> {
        self.matrix.row(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.products.len(),
        })
    }

    /// Cosine similarity of `vector` against every product document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `vector` references a term id
    /// outside this catalog's vocabulary.
    pub fn similarity_against_all(&self, vector: &SparseVector) -> Result<Vec<f32>> {
        let vocab = self.vectorizer.vocabulary_size();
        if let Some(max) = vector.max_index() {
            if max as usize >= vocab {
                return Err(Error::DimensionMismatch {
                    expected: vocab,
                    actual: max as usize,
                });
            }
        }
        Ok(self
            .vectors
            .iter()
            .map(|doc| cosine_similarity(vector, doc))
            .collect())
    }

    /// The `n` most loved products, ties broken by catalog order.
    #[must_use]
    pub fn top_loved(&self, n: usize) -> Vec<TopLovedEntry> {
        self.top_loved
            .iter()
            .take(n)
            .map(|&i| self.products[i].to_top_loved())
            .collect()
    }

    /// Product at `index`, if any.
    #[must_use]
    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always `false` for a built index; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of terms in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// The fitted vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }
}

fn name_map(products: &[Product]) -> std::result::Result<HashMap<String, usize>, BuildError> {
    let mut by_name = HashMap::with_capacity(products.len());
    for (i, product) in products.iter().enumerate() {
        if by_name.insert(product.name().to_string(), i).is_some() {
            return Err(BuildError::DuplicateProduct(product.name().to_string()));
        }
    }
    Ok(by_name)
}

fn popularity_order(products: &[Product]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..products.len()).collect();
    // Stable sort keeps catalog order among equal counts.
    order.sort_by(|&a, &b| products[b].loves_count().cmp(&products[a].loves_count()));
    order
}
