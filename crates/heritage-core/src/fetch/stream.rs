//! Streaming retrieval: write each received chunk straight to the temp file.

use super::{check_status, AttemptError, FetchOptions};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::Write;

/// GETs `url`, writing the body to `file` as it arrives. Returns bytes written.
pub(super) fn download_streaming(
    url: &str,
    opts: &FetchOptions,
    file: &mut File,
) -> Result<u64, AttemptError> {
    let written = Cell::new(0u64);
    let write_err: RefCell<Option<std::io::Error>> = RefCell::new(None);

    let mut easy = curl::easy::Easy::new();
    opts.configure(&mut easy, url)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written.set(written.get() + data.len() as u64);
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("streamed write failed: {}", e);
                *write_err.borrow_mut() = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_err.into_inner() {
        return Err(AttemptError::Storage(e));
    }
    performed?;
    check_status(&mut easy)?;

    file.flush().map_err(AttemptError::Storage)?;
    Ok(written.get())
}
