//! URL classification and temp-file naming for remote image references.

mod path;

pub use path::extension_from_url_path;

/// Suffix used for downloaded images whose URL path carries no extension.
pub const DEFAULT_IMAGE_SUFFIX: &str = ".jpg";

/// True if `reference` parses as an absolute URL with an `http` or `https` scheme.
///
/// Windows drive paths like `C:\img.png` parse as a URL with scheme `c`, so the
/// scheme check, not parse success, decides.
pub fn is_remote_url(reference: &str) -> bool {
    match url::Url::parse(reference) {
        Ok(u) => matches!(u.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Temp-file suffix for a downloaded image: the URL path's extension with a
/// leading dot (`.png`), or [`DEFAULT_IMAGE_SUFFIX`].
pub fn image_suffix(url: &str) -> String {
    match extension_from_url_path(url) {
        Some(ext) => format!(".{}", ext),
        None => DEFAULT_IMAGE_SUFFIX.to_string(),
    }
}
