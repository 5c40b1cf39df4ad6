//! Error types for the recommendation engine.

use thiserror::Error;

/// Reasons a catalog index cannot be built.
///
/// Every variant is fatal at startup: a process must not serve queries
/// against a half-built catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The dataset contained no products.
    #[error("Empty catalog: at least one product is required")]
    EmptyCatalog,

    /// A product record is missing a field required to build its document.
    #[error("Product at row {row} is missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the record in the input sequence
        row: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// Two records share a product name.
    #[error("Duplicate product name '{0}'")]
    DuplicateProduct(String),

    /// No token survived tokenization across the whole catalog.
    #[error("Empty vocabulary: no document contains a term of two or more characters")]
    EmptyVocabulary,
}

/// Main error type for glowmatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog construction failed.
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Caller supplied an empty or incomplete query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Product name is not part of the catalog.
    #[error("Product '{0}' not found")]
    NotFound(String),

    /// Positional index is outside the catalog.
    #[error("Index {index} out of bounds for catalog of {len} products")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Catalog size
        len: usize,
    },

    /// Vector or matrix does not fit the catalog's dimensions.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size (vocabulary size or product count)
        expected: usize,
        /// Offending size or term id
        actual: usize,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot file is corrupt or from an incompatible version.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl Error {
    /// Returns `true` for errors raised while building a catalog.
    #[must_use]
    pub fn is_build_error(&self) -> bool {
        matches!(self, Error::Build(_))
    }

    /// Returns `true` for errors caused by the caller's query.
    ///
    /// These are user-visible and never worth retrying.
    #[must_use]
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Error::InvalidQuery(_))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<postcard::Error> for Error {
    fn from(err: postcard::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

/// Result type alias for glowmatch operations.
pub type Result<T> = std::result::Result<T, Error>;
