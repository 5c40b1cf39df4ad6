//! End-to-end recommendation scenarios through the public API.

use std::sync::Arc;

use glowmatch_core::{
    CatalogIndex, Error, Query, RawProduct, Recommender, SimilarityMatrix, MISSING_QUERY_MESSAGE,
};

fn letters() -> Vec<RawProduct> {
    ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|name| RawProduct::new(name, "Water Glycerin", "Normal", "Toners"))
        .collect()
}

/// Row `i` of the matrix is `1.0 - 0.1 * |i - j|`.
fn banded_matrix(n: usize) -> SimilarityMatrix {
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let distance = i.abs_diff(j) as f32;
            data.push(1.0 - 0.1 * distance);
        }
    }
    SimilarityMatrix::from_rows(n, data).unwrap()
}

fn names(results: &[glowmatch_core::Recommendation]) -> Vec<&str> {
    results.iter().map(|r| r.product_name.as_str()).collect()
}

#[test]
fn test_by_product_follows_precomputed_row() {
    let index = CatalogIndex::build(letters())
        .unwrap()
        .with_precomputed_matrix(banded_matrix(6))
        .unwrap();
    let engine = Recommender::new(Arc::new(index));

    let results = engine.recommend_by_product("A", 5).unwrap();
    assert_eq!(names(&results), vec!["B", "C", "D", "E", "F"]);
    assert!((results[0].score - 0.9).abs() < 1e-6);

    let middle = engine.recommend_by_product("D", 2).unwrap();
    assert_eq!(names(&middle), vec!["C", "E"]);
}

#[test]
fn test_identical_documents_still_exclude_self() {
    let engine = Recommender::new(Arc::new(CatalogIndex::build(letters()).unwrap()));
    let results = engine.recommend_by_product("C", 5).unwrap();
    assert_eq!(names(&results), vec!["A", "B", "D", "E", "F"]);
    assert!(results.iter().all(|r| (r.score - 1.0).abs() < 1e-6));
}

#[test]
fn test_attributes_without_matching_terms_still_fill_k() {
    let records = vec![
        RawProduct::new("Balm", "Shea Butter", "Dry", "Lip Care"),
        RawProduct::new("Mist", "Rose Water", "Normal", "Toners"),
        RawProduct::new("Oil", "Jojoba", "Dry", "Face Oils"),
        RawProduct::new("Scrub", "Sugar", "Normal", "Exfoliators"),
    ];
    let engine = Recommender::new(Arc::new(CatalogIndex::build(records).unwrap()));

    let results = engine.recommend_by_attributes("Oily", "Moisturizer", 3).unwrap();
    assert_eq!(names(&results), vec!["Balm", "Mist", "Oil"]);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_query_resolution_matches_request_rules() {
    let engine = Recommender::new(Arc::new(CatalogIndex::build(letters()).unwrap()));

    // A product name wins over attributes.
    let query = Query::from_parts(Some("B"), Some("Normal"), Some("Toners")).unwrap();
    let results = engine.recommend(&query, 5).unwrap();
    assert!(results.iter().all(|r| r.product_name != "B"));

    let err = Query::from_parts(None, Some("Normal"), None).unwrap_err();
    assert!(matches!(err, Error::InvalidQuery(msg) if msg == MISSING_QUERY_MESSAGE));
}

#[test]
fn test_unknown_product_yields_empty_list() {
    let engine = Recommender::new(Arc::new(CatalogIndex::build(letters()).unwrap()));
    assert!(engine.recommend_by_product("Z", 5).unwrap().is_empty());
}
