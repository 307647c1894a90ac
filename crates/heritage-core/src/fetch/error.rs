//! Download error types.

use std::fmt;

/// Failure of a single download attempt.
#[derive(Debug)]
pub enum AttemptError {
    /// libcurl reported an error (connection refused, timeout, ...).
    Curl(curl::Error),
    /// Final response had a non-2xx status.
    Http(u32),
    /// Writing the body to the temp file failed.
    Storage(std::io::Error),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Curl(e) => write!(f, "{}", e),
            AttemptError::Http(code) => write!(f, "HTTP {}", code),
            AttemptError::Storage(e) => write!(f, "storage: {}", e),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttemptError::Curl(e) => Some(e),
            AttemptError::Storage(e) => Some(e),
            AttemptError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for AttemptError {
    fn from(e: curl::Error) -> Self {
        AttemptError::Curl(e)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cannot create temp file for download: {0}")]
    TempFile(#[source] std::io::Error),

    /// Both the direct and the streaming attempt failed.
    #[error("download of {url} failed: direct: {direct}; stream: {stream}")]
    DownloadFailed {
        url: String,
        direct: AttemptError,
        #[source]
        stream: AttemptError,
    },
}
