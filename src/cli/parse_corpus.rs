//! CLI entry-point for raw corpus normalisation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::data;

/// Args for the `parse-corpus` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Folder holding the zipped corpus archives.
    #[arg(short, long)]
    pub input_folder: PathBuf,
    /// Folder receiving one plain text file per archive entry.
    #[arg(short, long)]
    pub output_path: PathBuf,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let summary = data::corpus::normalize_archives(&args.input_folder, &args.output_path)?;
    println!(
        "normalised {} files from {} archives ({} already present, {} failed)",
        summary.written, summary.archives, summary.skipped_existing, summary.failed
    );
    Ok(())
}
