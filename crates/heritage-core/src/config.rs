use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "heritage_sites.json";
/// Default directory searched for relative image references.
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Global configuration loaded from `~/.config/heritage/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Catalog of site records (JSON array).
    pub catalog_path: PathBuf,
    /// Prefix tried first for relative image references.
    pub image_dir: PathBuf,
    /// Overall transfer timeout for image downloads. None = wait for the remote end.
    pub download_timeout_secs: Option<u64>,
    /// Connect timeout for image downloads. None = libcurl default.
    pub connect_timeout_secs: Option<u64>,
    /// Program used to open images. None = platform default opener.
    pub viewer_command: Option<String>,
    /// Directory for downloaded images and viewer copies. None = system temp dir.
    pub temp_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            download_timeout_secs: None,
            connect_timeout_secs: None,
            viewer_command: None,
            temp_dir: None,
        }
    }
}

impl ViewerConfig {
    pub fn download_timeout(&self) -> Option<Duration> {
        self.download_timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("heritage")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ViewerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ViewerConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<ViewerConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ViewerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.catalog_path, PathBuf::from("heritage_sites.json"));
        assert_eq!(cfg.image_dir, PathBuf::from("images"));
        assert!(cfg.download_timeout().is_none());
        assert!(cfg.connect_timeout().is_none());
        assert!(cfg.viewer_command.is_none());
        assert!(cfg.temp_dir.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ViewerConfig {
            download_timeout_secs: Some(20),
            viewer_command: Some("feh".to_string()),
            temp_dir: Some(PathBuf::from("/var/tmp/heritage")),
            ..ViewerConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ViewerConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            image_dir = "/srv/pictures"
            connect_timeout_secs = 5
        "#;
        let cfg: ViewerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.image_dir, PathBuf::from("/srv/pictures"));
        assert_eq!(cfg.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(cfg.connect_timeout(), Some(Duration::from_secs(5)));
        assert!(cfg.download_timeout().is_none());
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "image_dir = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
