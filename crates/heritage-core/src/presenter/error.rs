//! Per-record display failures. None of these abort a run.

use crate::fetch::FetchError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error(transparent)]
    Download(#[from] FetchError),

    #[error("cannot open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot display image {}: {reason}", path.display())]
    Display { path: PathBuf, reason: String },
}
