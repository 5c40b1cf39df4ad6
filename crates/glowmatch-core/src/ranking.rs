//! Ranking of similarity scores into bounded, ordered result lists.
//!
//! The order is total: score descending, then catalog index ascending. Two
//! runs over the same scores therefore always return the same list,
//! independently of the sort algorithm used underneath.

use std::cmp::Ordering;

/// A catalog position with the score that ranked it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    /// Catalog position
    pub index: usize,
    /// Similarity score
    pub score: f32,
}

/// Ranking order: higher score first, lower index first among equal scores.
///
/// Uses `total_cmp`, so NaN never makes the order inconsistent.
#[must_use]
pub fn rank_order(a: &ScoredIndex, b: &ScoredIndex) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Ranks every index of `scores`.
#[must_use]
pub fn rank_all(scores: &[f32]) -> Vec<ScoredIndex> {
    let mut ranked: Vec<ScoredIndex> = scores
        .iter()
        .enumerate()
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();
    ranked.sort_unstable_by(rank_order);
    ranked
}

/// Returns the `k` best entries of `scores`, skipping `exclude` if given.
///
/// The result has `min(k, candidates)` entries in ranking order.
///
/// # Examples
///
/// ```
/// use glowmatch_core::ranking::top_k;
///
/// let top = top_k(&[0.2, 0.9, 0.9, 1.0], 2, Some(3));
/// let indices: Vec<usize> = top.iter().map(|s| s.index).collect();
/// assert_eq!(indices, vec![1, 2]);
/// ```
#[must_use]
pub fn top_k(scores: &[f32], k: usize, exclude: Option<usize>) -> Vec<ScoredIndex> {
    let mut candidates: Vec<ScoredIndex> = scores
        .iter()
        .enumerate()
        .filter(|&(index, _)| Some(index) != exclude)
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    if k == 0 {
        return Vec::new();
    }
    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, rank_order);
        candidates.truncate(k);
    }
    candidates.sort_unstable_by(rank_order);
    candidates
}
