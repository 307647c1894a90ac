//! Guard for a downloaded temp image.

use std::path::Path;
use tempfile::TempPath;

/// A downloaded image file that is deleted exactly once: on [`TempImage::release`]
/// or, if never released, when dropped.
///
/// Deletion is best-effort. A failing delete is logged and ignored; it never
/// turns a record's outcome into an error.
#[derive(Debug)]
pub struct TempImage {
    path: TempPath,
}

impl TempImage {
    pub(crate) fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file now, ignoring failure.
    pub fn release(self) {
        let shown = self.path.to_path_buf();
        match self.path.close() {
            Ok(()) => tracing::debug!("removed temp image {}", shown.display()),
            Err(e) => tracing::debug!("ignoring failed removal of {}: {}", shown.display(), e),
        }
    }
}
