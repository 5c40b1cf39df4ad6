//! Tests for dataset loading.

use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

use super::error::Error;
use super::loader::{load_products, read_csv, read_json, DatasetFormat};

const CSV: &str = "\
product_name,brand_name,price_usd,ingredients,combined_skin_type,secondary_category,loves_count,image_link,rating
Hydra Gel,Aqualis,32.5,\"Water, Glycerin\",Oily,Moisturizers,1200,https://img/1.png,4.5
Night Balm,Dermaveil,62,\"Shea Butter, Ceramides\",Dry,Night Creams,80,,4.1
";

#[test]
fn test_read_csv_maps_columns_and_ignores_extras() {
    let records = read_csv(CSV.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.product_name.as_deref(), Some("Hydra Gel"));
    assert_eq!(first.ingredients.as_deref(), Some("Water, Glycerin"));
    assert_eq!(first.loves_count, 1200);
    assert!((first.price_usd - 32.5).abs() < f64::EPSILON);
}

#[test]
fn test_read_csv_empty_cell_is_none() {
    let records = read_csv(CSV.as_bytes()).unwrap();
    assert!(records[1].image_link.is_none());
}

#[test]
fn test_read_csv_bad_number_is_error() {
    let bad = "product_name,price_usd\nX,cheap\n";
    assert!(matches!(read_csv(bad.as_bytes()), Err(Error::Csv(_))));
}

#[test]
fn test_read_json_array() {
    let json = r#"[
        {"product_name": "A", "ingredients": "aqua", "combined_skin_type": "Dry",
         "secondary_category": "Masks", "price_usd": 10.0, "loves_count": 3}
    ]"#;
    let records = read_json(json.as_bytes()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].loves_count, 3);
}

#[test]
fn test_read_json_rejects_object() {
    assert!(matches!(
        read_json(r#"{"product_name": "A"}"#.as_bytes()),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_format_resolution() {
    assert_eq!(
        DatasetFormat::Auto.resolve(Path::new("a/products.CSV")).unwrap(),
        DatasetFormat::Csv
    );
    assert_eq!(
        DatasetFormat::Auto.resolve(Path::new("products.json")).unwrap(),
        DatasetFormat::Json
    );
    assert_eq!(
        DatasetFormat::Csv.resolve(Path::new("products.txt")).unwrap(),
        DatasetFormat::Csv
    );
    assert!(matches!(
        DatasetFormat::Auto.resolve(Path::new("products.parquet")),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_load_products_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("products.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(CSV.as_bytes()).unwrap();

    let records = load_products(&path, DatasetFormat::Auto).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_load_products_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_products(&dir.path().join("absent.csv"), DatasetFormat::Auto).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
