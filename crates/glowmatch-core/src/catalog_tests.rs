//! Tests for catalog index construction and lookups.

use super::catalog::CatalogIndex;
use super::error::{BuildError, Error};
use super::product::RawProduct;
use super::similarity::{SimilarityMatrix, SparseVector};
use super::test_fixtures::skincare_records;

const EPS: f32 = 1e-5;

fn catalog() -> CatalogIndex {
    CatalogIndex::build(skincare_records()).unwrap()
}

#[test]
fn test_build_indexes_every_product() {
    let index = catalog();
    assert_eq!(index.len(), 6);
    assert!(!index.is_empty());
    assert!(index.vocabulary_size() > 10);
    for (i, product) in index.products().iter().enumerate() {
        assert_eq!(index.index_of(product.name()).unwrap(), i);
    }
}

#[test]
fn test_index_of_is_exact_and_case_sensitive() {
    let index = catalog();
    assert_eq!(index.index_of("Barrier Cream").unwrap(), 2);
    assert!(matches!(
        index.index_of("barrier cream"),
        Err(Error::NotFound(name)) if name == "barrier cream"
    ));
    assert!(index.index_of("Barrier Cream ").is_err());
}

#[test]
fn test_similarity_row_shape_and_diagonal() {
    let index = catalog();
    for i in 0..index.len() {
        let row = index.similarity_row(i).unwrap();
        assert_eq!(row.len(), index.len());
        assert!((row[i] - 1.0).abs() < EPS);
        assert!(row.iter().all(|&s| (0.0..=1.0 + EPS).contains(&s)));
    }
}

#[test]
fn test_similarity_row_out_of_bounds() {
    let index = catalog();
    assert!(matches!(
        index.similarity_row(6),
        Err(Error::IndexOutOfBounds { index: 6, len: 6 })
    ));
}

#[test]
fn test_similar_documents_score_higher() {
    let index = catalog();
    let row = index.similarity_row(0).unwrap();
    // Oil Control Gel shares niacinamide/zinc with Mattifying Lotion,
    // nothing but "moisturizers" with Barrier Cream.
    assert!(row[1] > row[2]);
}

#[test]
fn test_vectorize_uses_frozen_vocabulary() {
    let index = catalog();
    let terms = index.vocabulary_size();
    let v = index.vectorize("Oily Moisturizers hyaluronic");
    assert_eq!(index.vocabulary_size(), terms);
    assert_eq!(v.nnz(), 2);
}

#[test]
fn test_similarity_against_all_matches_row_for_member_document() {
    let index = catalog();
    let doc = index.product(3).unwrap().document();
    let scores = index.similarity_against_all(&index.vectorize(&doc)).unwrap();
    let row = index.similarity_row(3).unwrap();
    assert_eq!(scores.len(), index.len());
    for (a, b) in scores.iter().zip(row) {
        assert!((a - b).abs() < EPS);
    }
}

#[test]
fn test_similarity_against_all_rejects_foreign_vector() {
    let index = catalog();
    let foreign = SparseVector::from_pairs(vec![(u32::MAX, 1.0)]);
    assert!(matches!(
        index.similarity_against_all(&foreign),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn test_similarity_against_all_zero_vector() {
    let index = catalog();
    let scores = index
        .similarity_against_all(&SparseVector::default())
        .unwrap();
    assert!(scores.iter().all(|&s| s == 0.0));
}

#[test]
fn test_top_loved_orders_by_loves_then_catalog_index() {
    let index = catalog();
    let top = index.top_loved(3);
    let names: Vec<&str> = top.iter().map(|e| e.product_name.as_str()).collect();
    // Mattifying Lotion and Barrier Cream tie at 12000; catalog order decides.
    assert_eq!(
        names,
        vec!["Mattifying Lotion", "Barrier Cream", "Oil Control Gel"]
    );
    assert_eq!(index.top_loved(100).len(), 6);
    assert!(index.top_loved(0).is_empty());
}

#[test]
fn test_build_empty_catalog() {
    let err = CatalogIndex::build(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::Build(BuildError::EmptyCatalog)));
}

#[test]
fn test_build_missing_field() {
    let mut records = skincare_records();
    records[4].secondary_category = None;
    let err = CatalogIndex::build(records).unwrap_err();
    assert!(matches!(
        err,
        Error::Build(BuildError::MissingField {
            row: 4,
            field: "secondary_category"
        })
    ));
}

#[test]
fn test_build_duplicate_name() {
    let mut records = skincare_records();
    records.push(RawProduct::new("Gentle Foam", "aqua", "Normal", "Cleansers"));
    let err = CatalogIndex::build(records).unwrap_err();
    assert!(matches!(
        err,
        Error::Build(BuildError::DuplicateProduct(name)) if name == "Gentle Foam"
    ));
}

#[test]
fn test_build_single_product() {
    let index = CatalogIndex::build(vec![RawProduct::new(
        "Solo",
        "aqua glycerin",
        "Normal",
        "Toners",
    )])
    .unwrap();
    assert_eq!(index.similarity_row(0).unwrap(), &[1.0]);
}

#[test]
fn test_with_precomputed_matrix() {
    let index = catalog();
    let n = index.len();
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    let matrix = SimilarityMatrix::from_rows(n, data).unwrap();
    let index = index.with_precomputed_matrix(matrix).unwrap();
    assert!(index.similarity_row(0).unwrap()[1].abs() < EPS);

    let wrong = SimilarityMatrix::from_rows(1, vec![1.0]).unwrap();
    assert!(matches!(
        index.with_precomputed_matrix(wrong),
        Err(Error::DimensionMismatch {
            expected: 6,
            actual: 1
        })
    ));
}
