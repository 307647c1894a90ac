//! Image display hand-off.
//!
//! The presenter decodes each image first, then passes it to an [`ImageViewer`].
//! The stock viewer launches an external program (the desktop's default opener
//! unless configured otherwise) on a PNG copy of the image that it writes and
//! keeps. Openers like `xdg-open` return before the real viewer has read the
//! file, so the program must never get a path the presenter deletes afterwards.

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Prefix of the copies handed to the external viewer.
pub const VIEWER_COPY_PREFIX: &str = "heritage-view-";

/// Receives each successfully decoded image.
pub trait ImageViewer {
    fn show(&mut self, path: &Path, image: &DynamicImage) -> Result<()>;
}

/// Opens and decodes `path`, guessing the format from its contents.
pub fn decode_image(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Launches an external program with the path of its own copy of the image
/// as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemViewer {
    program: String,
    args: Vec<String>,
    /// Where viewer copies are written. None = system temp dir.
    copy_dir: Option<PathBuf>,
}

impl SystemViewer {
    /// `command` is split on whitespace into program and leading arguments
    /// (e.g. `"feh --scale-down"`). `None` or a blank string uses the platform opener.
    pub fn new(command: Option<&str>) -> Self {
        let mut parts = command.unwrap_or_default().split_whitespace().map(String::from);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
                copy_dir: None,
            },
            None => Self::platform_default(),
        }
    }

    #[cfg(target_os = "macos")]
    fn platform_default() -> Self {
        Self {
            program: "open".to_string(),
            args: Vec::new(),
            copy_dir: None,
        }
    }

    #[cfg(windows)]
    fn platform_default() -> Self {
        Self {
            program: "cmd".to_string(),
            args: vec!["/C".to_string(), "start".to_string(), String::new()],
            copy_dir: None,
        }
    }

    #[cfg(not(any(target_os = "macos", windows)))]
    fn platform_default() -> Self {
        Self {
            program: "xdg-open".to_string(),
            args: Vec::new(),
            copy_dir: None,
        }
    }

    /// Writes viewer copies into `dir` instead of the system temp dir.
    pub fn with_copy_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.copy_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Encodes `image` as PNG into a new file that is left in place for the
    /// external program.
    fn write_copy(&self, image: &DynamicImage) -> Result<PathBuf> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(VIEWER_COPY_PREFIX).suffix(".png");
        let mut file = match &self.copy_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("create viewer copy")?;

        {
            let mut writer = BufWriter::new(file.as_file_mut());
            DynamicImage::ImageRgba8(image.to_rgba8())
                .write_to(&mut writer, ImageFormat::Png)
                .context("encode viewer copy")?;
            writer.flush().context("write viewer copy")?;
        }

        let (_, path) = file.keep().context("keep viewer copy")?;
        Ok(path)
    }
}

impl ImageViewer for SystemViewer {
    fn show(&mut self, path: &Path, image: &DynamicImage) -> Result<()> {
        let copy = self.write_copy(image)?;
        tracing::debug!(
            "opening {} ({}x{}) as {} with {}",
            path.display(),
            image.width(),
            image.height(),
            copy.display(),
            self.program
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&copy)
            .status()
            .with_context(|| format!("launch image viewer {}", self.program))?;
        if !status.success() {
            anyhow::bail!("image viewer {} exited with {}", self.program, status);
        }
        Ok(())
    }
}
