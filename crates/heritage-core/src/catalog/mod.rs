//! Catalog loading.
//!
//! Reads the heritage-site catalog (a JSON array of records) into memory,
//! preserving file order, which is also display order.

mod error;
mod format;
mod record;

pub use error::CatalogError;
pub use format::{describe, join_precautions};
pub use record::{BuiltYear, SiteRecord};

use std::fs;
use std::io;
use std::path::Path;

/// Loads all records from `path`. No partial parsing: any decode error fails the whole catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<SiteRecord>, CatalogError> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records: Vec<SiteRecord> =
        serde_json::from_slice(&data).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
