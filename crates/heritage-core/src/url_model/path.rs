//! Extension extraction from URL path.

use std::path::Path;

/// Extension of the last path segment of `url`, without the dot.
///
/// Returns `None` if the URL cannot be parsed, the path is empty/root, or the
/// last segment has no usable extension. Query and fragment are ignored.
pub fn extension_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    let ext = Path::new(segment).extension()?.to_str()?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_string())
}
