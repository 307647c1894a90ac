//! CLI for the heritage site viewer.

use anyhow::{Context, Result};
use clap::Parser;
use heritage_core::catalog;
use heritage_core::config;
use heritage_core::presenter::{Presenter, PresenterOptions};
use heritage_core::resolver::Resolver;
use heritage_core::viewer::SystemViewer;
use std::io::{self, Write};

/// Show each heritage site from the catalog along with its picture.
#[derive(Debug, Parser)]
#[command(name = "heritage", version)]
#[command(about = "Print heritage site records and open their images", long_about = None)]
pub struct Cli {
    /// Wait for Enter after each site.
    #[arg(short, long)]
    pub pause: bool,
}

pub fn run_from_args() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    // Catalog errors are returned unwrapped so main can map them to exit codes.
    let records = catalog::load_catalog(&cfg.catalog_path)?;

    let resolver = Resolver::from_config(&cfg);
    let mut viewer = SystemViewer::new(cfg.viewer_command.as_deref());
    if let Some(dir) = &cfg.temp_dir {
        viewer = viewer.with_copy_dir(dir);
    }
    let stdin = io::stdin();
    let mut presenter = Presenter::new(
        resolver,
        viewer,
        io::stdout().lock(),
        stdin.lock(),
        PresenterOptions { pause: cli.pause },
    );

    let summary = presenter
        .present(&records)
        .context("write to terminal")?;
    let (_, mut out) = presenter.into_parts();
    writeln!(out, "{}", summary).context("write to terminal")?;
    tracing::info!("{}", summary);
    Ok(())
}
