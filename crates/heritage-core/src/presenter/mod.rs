//! Display loop.
//!
//! For each record in catalog order: print its text, resolve and show its
//! image, release any downloaded temp file, print a separator, and optionally
//! wait for Enter. Per-record failures are reported and never stop the loop.

mod error;
mod outcome;

pub use error::PresentError;
pub use outcome::{PresentSummary, RecordOutcome};

use crate::catalog::{self, SiteRecord};
use crate::resolver::{ResolvedImage, Resolver};
use crate::viewer::{self, ImageViewer};
use std::io::{self, BufRead, Write};

/// Separator printed after every record.
pub const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenterOptions {
    /// Block for Enter after each record.
    pub pause: bool,
}

pub struct Presenter<V, W, R> {
    resolver: Resolver,
    viewer: V,
    out: W,
    input: R,
    options: PresenterOptions,
}

impl<V: ImageViewer, W: Write, R: BufRead> Presenter<V, W, R> {
    pub fn new(resolver: Resolver, viewer: V, out: W, input: R, options: PresenterOptions) -> Self {
        Self {
            resolver,
            viewer,
            out,
            input,
            options,
        }
    }

    /// Presents every record. Only failures to write output (or read the pause
    /// prompt) are returned as errors.
    pub fn present(&mut self, records: &[SiteRecord]) -> io::Result<PresentSummary> {
        let mut summary = PresentSummary::default();
        for record in records {
            let outcome = self.present_record(record)?;
            summary.outcomes.push(outcome);
        }
        Ok(summary)
    }

    pub fn into_parts(self) -> (V, W) {
        (self.viewer, self.out)
    }

    fn present_record(&mut self, record: &SiteRecord) -> io::Result<RecordOutcome> {
        for line in catalog::describe(record) {
            writeln!(self.out, "{}", line)?;
        }

        let outcome = match self.resolver.resolve(record) {
            Ok(resolved) => {
                let outcome = self.display(&resolved);
                resolved.release();
                outcome
            }
            Err(e) => RecordOutcome::Failed(PresentError::Download(e)),
        };
        tracing::info!("{}: {:?}", record.display_name(), outcome);

        self.report(record, &outcome)?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        if self.options.pause {
            self.wait_for_enter()?;
        }
        Ok(outcome)
    }

    fn display(&mut self, resolved: &ResolvedImage) -> RecordOutcome {
        let path = match resolved.path() {
            Some(p) => p,
            None => return RecordOutcome::NoImagePath,
        };
        if !path.exists() {
            return RecordOutcome::NotFound(path.to_path_buf());
        }

        let image = match viewer::decode_image(path) {
            Ok(img) => img,
            Err(source) => {
                return RecordOutcome::Failed(PresentError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        match self.viewer.show(path, &image) {
            Ok(()) => RecordOutcome::Displayed(path.to_path_buf()),
            Err(e) => RecordOutcome::Failed(PresentError::Display {
                path: path.to_path_buf(),
                reason: format!("{:#}", e),
            }),
        }
    }

    fn report(&mut self, record: &SiteRecord, outcome: &RecordOutcome) -> io::Result<()> {
        match outcome {
            RecordOutcome::Displayed(path) => {
                writeln!(self.out, "  🖼️ Displayed image: {}", path.display())
            }
            RecordOutcome::NoImagePath => {
                writeln!(self.out, "  ⚠️ No image path for {}", record.display_name())
            }
            RecordOutcome::NotFound(path) => {
                writeln!(self.out, "  ⚠️ Image not found: {}", path.display())
            }
            RecordOutcome::Failed(e) => writeln!(
                self.out,
                "  ❌ Could not display image for {}: {}",
                record.display_name(),
                e
            ),
        }
    }

    fn wait_for_enter(&mut self) -> io::Result<()> {
        write!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        let mut line = String::new();
        // EOF counts as acknowledgment.
        self.input.read_line(&mut line)?;
        writeln!(self.out)?;
        Ok(())
    }
}
