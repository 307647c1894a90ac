//! Catalog loading failures. All of them are fatal to a run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("catalog file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Process exit status for this failure. Missing and malformed catalogs get distinct codes.
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::NotFound { .. } => 2,
            CatalogError::Malformed { .. } => 3,
            CatalogError::Io { .. } => 1,
        }
    }
}
