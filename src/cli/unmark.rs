//! CLI entry-point for stripping markers before parsing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::nlp::markup;

/// Args for the `unmark` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Sentences carrying `**subject**` and `##span##` markers.
    #[arg(short, long)]
    pub text_path: PathBuf,
    /// Destination for one plain sentence per line.
    #[arg(short, long)]
    pub output_path: PathBuf,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let text = std::fs::read_to_string(&args.text_path)
        .with_context(|| format!("reading {}", args.text_path.display()))?;
    let plain: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(markup::unmarked_text)
        .collect();
    let mut body = plain.join("\n");
    body.push('\n');
    std::fs::write(&args.output_path, body)
        .with_context(|| format!("writing {}", args.output_path.display()))?;
    info!(sentences = plain.len(), path = %args.output_path.display(), "wrote unmarked sentences");
    Ok(())
}
