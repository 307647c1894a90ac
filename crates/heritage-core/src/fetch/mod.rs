//! Remote image download into a temporary file.
//!
//! One logical download per URL: a direct buffered GET first, then, on any
//! failure, a streaming GET into the same (truncated) temp file. There is no
//! further retry.

mod direct;
mod error;
mod stream;
mod temp;

pub use error::{AttemptError, FetchError};
pub use temp::TempImage;

use crate::url_model;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix of every temp file created for a download.
pub const TEMP_PREFIX: &str = "heritage-";

/// libcurl options shared by both attempts, plus where the temp file goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overall transfer timeout. None = no limit.
    pub timeout: Option<Duration>,
    /// Connect timeout. None = libcurl default.
    pub connect_timeout: Option<Duration>,
    /// Directory for downloaded temp files. None = system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl FetchOptions {
    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }
        Ok(())
    }
}

/// Downloads `url` into a new uniquely named temp file and returns its guard.
///
/// The temp file keeps the URL path's extension (default `.jpg`). If both
/// attempts fail the temp file is removed before the error is returned.
pub fn download_to_temp(url: &str, opts: &FetchOptions) -> Result<TempImage, FetchError> {
    let suffix = url_model::image_suffix(url);
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(&suffix);
    let mut file = match &opts.temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(FetchError::TempFile)?;
    tracing::debug!("downloading {} to {}", url, file.path().display());

    let direct_err = match direct::download_direct(url, opts, file.as_file_mut()) {
        Ok(bytes) => {
            tracing::debug!("direct download of {} wrote {} bytes", url, bytes);
            return Ok(TempImage::new(file.into_temp_path()));
        }
        Err(e) => e,
    };
    tracing::warn!("direct download of {} failed ({}), retrying as stream", url, direct_err);

    let stream_result = truncate(file.as_file_mut())
        .map_err(AttemptError::Storage)
        .and_then(|()| stream::download_streaming(url, opts, file.as_file_mut()));

    match stream_result {
        Ok(bytes) => {
            tracing::debug!("streamed download of {} wrote {} bytes", url, bytes);
            Ok(TempImage::new(file.into_temp_path()))
        }
        Err(stream_err) => {
            TempImage::new(file.into_temp_path()).release();
            Err(FetchError::DownloadFailed {
                url: url.to_string(),
                direct: direct_err,
                stream: stream_err,
            })
        }
    }
}

/// Empties the temp file so the streaming attempt starts from a clean slate.
fn truncate(file: &mut File) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    Ok(())
}

/// Fails on any non-2xx final status.
fn check_status(easy: &mut curl::easy::Easy) -> Result<(), AttemptError> {
    let code = easy.response_code().map_err(AttemptError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(AttemptError::Http(code));
    }
    Ok(())
}
