//! Prebuilt catalog snapshots.
//!
//! A snapshot stores a fully built [`CatalogIndex`] so that a server can
//! start without refitting the vectorizer or recomputing the N×N matrix.
//!
//! Layout:
//! ```text
//! [magic "GLWM" : 4 bytes][format version : u16 LE][postcard payload]
//! ```

use std::fs;
use std::path::Path;

use crate::catalog::CatalogIndex;
use crate::error::{Error, Result};

/// File magic.
pub const SNAPSHOT_MAGIC: &[u8; 4] = b"GLWM";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

pub(crate) const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + std::mem::size_of::<u16>();

/// Serializes `index` into snapshot bytes.
pub fn to_bytes(index: &CatalogIndex) -> Result<Vec<u8>> {
    let payload = postcard::to_allocvec(index)?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(SNAPSHOT_MAGIC);
    bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Restores an index from snapshot bytes.
///
/// # Errors
///
/// Returns [`Error::Snapshot`] if the header is wrong, the version is not
/// supported, or the payload is corrupt.
pub fn from_bytes(bytes: &[u8]) -> Result<CatalogIndex> {
    if bytes.len() < HEADER_LEN || &bytes[..SNAPSHOT_MAGIC.len()] != SNAPSHOT_MAGIC {
        return Err(Error::Snapshot("not a glowmatch snapshot".to_string()));
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != SNAPSHOT_VERSION {
        return Err(Error::Snapshot(format!(
            "unsupported snapshot version {version} (expected {SNAPSHOT_VERSION})"
        )));
    }
    let index: CatalogIndex = postcard::from_bytes(&bytes[HEADER_LEN..])?;
    index.rehydrate()
}

/// Writes `index` to `path`.
pub fn save(index: &CatalogIndex, path: &Path) -> Result<()> {
    let bytes = to_bytes(index)?;
    fs::write(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        products = index.len(),
        "Saved catalog snapshot"
    );
    Ok(())
}

/// Reads an index from `path`.
pub fn load(path: &Path) -> Result<CatalogIndex> {
    let bytes = fs::read(path)?;
    let index = from_bytes(&bytes)?;
    tracing::info!(
        path = %path.display(),
        products = index.len(),
        "Loaded catalog snapshot"
    );
    Ok(index)
}
