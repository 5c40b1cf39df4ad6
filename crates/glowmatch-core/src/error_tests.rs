//! Tests for error types.

use super::error::{BuildError, Error};

#[test]
fn test_build_error_display() {
    let err = BuildError::MissingField {
        row: 3,
        field: "ingredients",
    };
    assert_eq!(
        err.to_string(),
        "Product at row 3 is missing required field 'ingredients'"
    );
}

#[test]
fn test_build_error_wraps_into_error() {
    let err: Error = BuildError::EmptyCatalog.into();
    assert!(err.is_build_error());
    assert!(!err.is_invalid_query());
    assert!(err.to_string().starts_with("Build error: Empty catalog"));
}

#[test]
fn test_invalid_query_classification() {
    let err = Error::InvalidQuery("skin type must not be blank".to_string());
    assert!(err.is_invalid_query());
    assert!(!err.is_build_error());
    assert_eq!(
        err.to_string(),
        "Invalid query: skin type must not be blank"
    );
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
