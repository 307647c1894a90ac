//! Direct retrieval: buffer the whole body, then write it out in one go.

use super::{check_status, AttemptError, FetchOptions};
use std::fs::File;
use std::io::Write;

/// GETs `url` into memory and writes the body to `file`. Returns bytes written.
pub(super) fn download_direct(
    url: &str,
    opts: &FetchOptions,
    file: &mut File,
) -> Result<u64, AttemptError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    opts.configure(&mut easy, url)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }
    check_status(&mut easy)?;

    file.write_all(&body).map_err(AttemptError::Storage)?;
    file.flush().map_err(AttemptError::Storage)?;
    Ok(body.len() as u64)
}
