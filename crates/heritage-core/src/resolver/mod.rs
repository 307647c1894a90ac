//! Image reference resolution.
//!
//! Turns a record's image reference into a concrete local path. Order, first
//! match wins: no reference, remote URL (downloaded to a temp file), absolute
//! path (trusted as-is), relative path (searched under the image dir first).

mod relative;

pub use relative::{normalize_separators, resolve_relative};

use crate::catalog::SiteRecord;
use crate::config::ViewerConfig;
use crate::fetch::{self, FetchError, FetchOptions, TempImage};
use crate::url_model;
use std::path::{Path, PathBuf};

/// Result of resolving one record's image reference. Consumed by a single display step.
#[derive(Debug)]
pub enum ResolvedImage {
    /// The record names no image.
    None,
    /// A path the record points at; never deleted.
    Local(PathBuf),
    /// A downloaded copy that must be released after display.
    Temporary(TempImage),
}

impl ResolvedImage {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedImage::None => None,
            ResolvedImage::Local(p) => Some(p),
            ResolvedImage::Temporary(t) => Some(t.path()),
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, ResolvedImage::Temporary(_))
    }

    /// Deletes the backing file if it is temporary; a no-op otherwise.
    pub fn release(self) {
        if let ResolvedImage::Temporary(t) = self {
            t.release();
        }
    }
}

/// Resolves image references against a fixed image directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    image_dir: PathBuf,
    fetch: FetchOptions,
}

impl Resolver {
    pub fn new(image_dir: impl Into<PathBuf>, fetch: FetchOptions) -> Self {
        Self {
            image_dir: image_dir.into(),
            fetch,
        }
    }

    pub fn from_config(cfg: &ViewerConfig) -> Self {
        Self::new(
            cfg.image_dir.clone(),
            FetchOptions {
                timeout: cfg.download_timeout(),
                connect_timeout: cfg.connect_timeout(),
                temp_dir: cfg.temp_dir.clone(),
            },
        )
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn resolve(&self, record: &SiteRecord) -> Result<ResolvedImage, FetchError> {
        let reference = match record.image_reference() {
            Some(r) => r,
            None => return Ok(ResolvedImage::None),
        };

        if url_model::is_remote_url(reference) {
            let temp = fetch::download_to_temp(reference, &self.fetch)?;
            return Ok(ResolvedImage::Temporary(temp));
        }

        let as_path = Path::new(reference);
        if as_path.is_absolute() {
            return Ok(ResolvedImage::Local(as_path.to_path_buf()));
        }

        let resolved = resolve_relative(&self.image_dir, reference);
        tracing::debug!("relative image {} resolved to {}", reference, resolved.display());
        Ok(ResolvedImage::Local(resolved))
    }
}
