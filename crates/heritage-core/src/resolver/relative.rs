//! Candidate search for relative image references.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Rewrites both `/` and `\` to the platform separator.
pub fn normalize_separators(path: &Path) -> PathBuf {
    let s = path.to_string_lossy();
    let normalized: String = s
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect();
    PathBuf::from(normalized)
}

/// First existing of: `image_dir/reference`, `reference`, and the prefixed
/// candidate with normalized separators. Falls back to the prefixed candidate,
/// un-normalized, when none exist; callers must recheck existence.
pub fn resolve_relative(image_dir: &Path, reference: &str) -> PathBuf {
    let prefixed = image_dir.join(reference);
    let bare = PathBuf::from(reference);
    let normalized = normalize_separators(&prefixed);

    let found = [&prefixed, &bare, &normalized]
        .into_iter()
        .find(|candidate| candidate.exists())
        .cloned();
    found.unwrap_or(prefixed)
}
