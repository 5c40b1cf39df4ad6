//! TF-IDF text vectorizer.
//!
//! The vocabulary and IDF weights are fitted once over the catalog documents
//! and frozen: [`TfidfVectorizer::transform`] maps any later text into the same
//! space and never refits.
//!
//! **TF-IDF Formula:**
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1     (smooth_idf)
//! idf(t)      = ln(n / df(t)) + 1                  (otherwise)
//! ```
//! Each row is then L2-normalised, so the dot product of two rows is their
//! cosine similarity.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::similarity::SparseVector;

/// Tokens shorter than this (in chars) are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Term weighting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerParams {
    /// Lowercase text before tokenizing.
    pub lowercase: bool,
    /// Add one to document frequencies, as if an extra document contained every term.
    pub smooth_idf: bool,
    /// Replace tf with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Splits text into word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_`, at least
/// [`MIN_TOKEN_CHARS`] long. Punctuation, whitespace and hyphens separate tokens.
///
/// # Examples
///
/// ```
/// use glowmatch_core::vectorizer::tokenize;
///
/// let tokens = tokenize("Water/Aqua, Niacinamide (5%)", true);
/// assert_eq!(tokens, vec!["water", "aqua", "niacinamide"]);
/// ```
#[must_use]
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(|t| if lowercase { t.to_lowercase() } else { t.to_string() })
        .collect()
}

/// A fitted, frozen TF-IDF vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    params: VectorizerParams,
    /// Term → column id, ids assigned in lexicographic term order
    vocabulary: HashMap<String, u32>,
    /// Inverse document frequency per column id
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learns vocabulary and IDF weights from `documents`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::EmptyCatalog`] if `documents` is empty
    /// - [`BuildError::EmptyVocabulary`] if no document yields a token
    // Reason: document counts stay far below 2^53 and vocabulary ids fit in u32
    // for any catalog that fits in memory.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn fit<S: AsRef<str>>(
        documents: &[S],
        params: VectorizerParams,
    ) -> Result<Self, BuildError> {
        if documents.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = tokenize(doc.as_ref(), params.lowercase)
                .into_iter()
                .collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(BuildError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (id, (term, df)) in doc_freq.into_iter().enumerate() {
            let df = df as f64;
            let weight = if params.smooth_idf {
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            } else {
                (n / df).ln() + 1.0
            };
            vocabulary.insert(term, id as u32);
            idf.push(weight as f32);
        }

        tracing::debug!(
            terms = idf.len(),
            documents = documents.len(),
            "Fitted TF-IDF vocabulary"
        );

        Ok(Self {
            params,
            vocabulary,
            idf,
        })
    }

    /// Fits on `documents` and returns their vectors in input order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fit`].
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        params: VectorizerParams,
    ) -> Result<(Self, Vec<SparseVector>), BuildError> {
        let vectorizer = Self::fit(documents, params)?;
        let vectors = documents
            .iter()
            .map(|d| vectorizer.transform(d.as_ref()))
            .collect();
        Ok((vectorizer, vectors))
    }

    /// Maps `text` into the fitted space.
    ///
    /// Out-of-vocabulary terms are ignored; text with no known term yields a
    /// zero vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for token in tokenize(text, self.params.lowercase) {
            if let Some(&id) = self.vocabulary.get(&token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(id, count)| {
                // Reason: term counts within one document are tiny.
                #[allow(clippy::cast_precision_loss)]
                let tf = count as f32;
                let tf = if self.params.sublinear_tf {
                    1.0 + tf.ln()
                } else {
                    tf
                };
                (id, tf * self.idf[id as usize])
            })
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    /// `true` if every vocabulary id has an IDF weight.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.vocabulary.len() == self.idf.len()
            && self
                .vocabulary
                .values()
                .all(|&id| (id as usize) < self.idf.len())
    }

    /// Number of terms in the vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Column id of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_id(term).map(|id| self.idf[id as usize])
    }

    /// Weighting options this vectorizer was fitted with.
    #[must_use]
    pub fn params(&self) -> VectorizerParams {
        self.params
    }
}
