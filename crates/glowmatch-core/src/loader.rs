//! Dataset loading.
//!
//! Reads [`RawProduct`] records from a CSV file with a header row or from a
//! JSON array of objects. Extra columns are ignored; missing text columns
//! surface later as [`BuildError::MissingField`](crate::BuildError::MissingField).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::product::RawProduct;

/// On-disk dataset format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Pick by file extension (`.csv`, `.json`).
    #[default]
    Auto,
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array of product objects.
    Json,
}

impl DatasetFormat {
    /// Resolves [`DatasetFormat::Auto`] against `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the extension is not recognised.
    pub fn resolve(self, path: &Path) -> Result<Self> {
        if self != DatasetFormat::Auto {
            return Ok(self);
        }
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("json") => Ok(DatasetFormat::Json),
            _ => Err(Error::Config(format!(
                "cannot infer dataset format from '{}'; use csv or json",
                path.display()
            ))),
        }
    }
}

/// Loads every record of the dataset at `path`.
///
/// # Errors
///
/// Returns an IO, CSV or JSON error if the file cannot be read or parsed.
pub fn load_products(path: &Path, format: DatasetFormat) -> Result<Vec<RawProduct>> {
    let format = format.resolve(path)?;
    let file = File::open(path)?;
    let records = match format {
        DatasetFormat::Csv => read_csv(BufReader::new(file))?,
        // Auto never survives resolve()
        DatasetFormat::Json | DatasetFormat::Auto => read_json(BufReader::new(file))?,
    };
    tracing::info!(
        path = %path.display(),
        ?format,
        records = records.len(),
        "Loaded product dataset"
    );
    Ok(records)
}

/// Parses CSV records with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawProduct>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    csv_reader
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}

/// Parses a JSON array of records.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawProduct>> {
    Ok(serde_json::from_reader(reader)?)
}
