//! Cosine similarity over sparse term vectors and the dense pairwise matrix.
//!
//! # Formula
//! ```text
//! cosine(a, b) = (a · b) / (||a|| * ||b||)
//! ```
//!
//! A zero vector is orthogonal to everything, so its similarity is `0.0`.

use serde::{Deserialize, Serialize};

/// Sparse vector: strictly increasing term ids with their weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseVector {
    /// Builds a sparse vector from `(term_id, weight)` pairs.
    ///
    /// Pairs are sorted by term id; zero weights are dropped and duplicate
    /// ids are summed.
    #[must_use]
    pub fn from_pairs(mut pairs: Vec<(u32, f32)>) -> Self {
        pairs.sort_unstable_by_key(|&(id, _)| id);
        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f32> = Vec::with_capacity(pairs.len());
        for (id, value) in pairs {
            if indices.last() == Some(&id) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(id);
                values.push(value);
            }
        }
        let (indices, values) = indices
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v != 0.0)
            .unzip();
        Self { indices, values }
    }

    /// Term ids with a non-zero weight.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Weights, parallel to [`Self::indices`].
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if every weight is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest term id, if any.
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        self.indices.last().copied()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Scales the vector to unit length. Zero vectors stay zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// `true` if ids strictly increase and pair up one-to-one with values.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.indices.len() == self.values.len() && self.indices.windows(2).all(|w| w[0] < w[1])
    }

    /// Dot product via a merge over both sorted index lists.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0_f32;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine similarity of two sparse vectors.
///
/// Returns `0.0` when either vector is zero.
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Dense N×N cosine similarity matrix, row-major.
///
/// Symmetric with a unit diagonal. Built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Computes pairwise similarities for `vectors`.
    ///
    /// Rows are filled in parallel when the `parallel` feature is enabled.
    /// The diagonal is pinned to `1.0` even for zero vectors, so every
    /// product is maximally similar to itself.
    #[must_use]
    pub fn compute(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0_f32; n * n];
        if n == 0 {
            return Self { n, data };
        }

        let fill_row = |(i, row): (usize, &mut [f32])| {
            let vi = &vectors[i];
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if i == j {
                    1.0
                } else {
                    cosine_similarity(vi, &vectors[j])
                };
            }
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(n).enumerate().for_each(fill_row);
        }
        #[cfg(not(feature = "parallel"))]
        {
            data.chunks_mut(n).enumerate().for_each(fill_row);
        }

        Self { n, data }
    }

    /// Builds a matrix from precomputed row-major values.
    ///
    /// Returns `None` if `data.len() != n * n`.
    #[must_use]
    pub fn from_rows(n: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == n * n).then_some(Self { n, data })
    }

    /// `true` if the cell buffer holds exactly N×N values.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.n.checked_mul(self.n) == Some(self.data.len())
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Row `i`, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        (i < self.n).then(|| &self.data[i * self.n..(i + 1) * self.n])
    }

    /// Cell `(i, j)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        (i < self.n && j < self.n).then(|| self.data[i * self.n + j])
    }
}
