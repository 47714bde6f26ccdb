//! CLI entry-point for training role embedding models.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp::training};

/// Args for the `train` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Folder holding one sub-folder of label streams per model.
    #[arg(short, long)]
    pub input_path: PathBuf,
    /// Folder receiving the trained `.vec` models.
    #[arg(short, long)]
    pub output_path: PathBuf,
    /// Override the embedding dimensionality.
    #[arg(long)]
    pub vector_size: Option<usize>,
    /// Override the context window.
    #[arg(long)]
    pub window: Option<usize>,
    /// Override the vocabulary frequency threshold.
    #[arg(long)]
    pub min_count: Option<usize>,
    /// Override the number of passes over the corpus.
    #[arg(long)]
    pub epochs: Option<usize>,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let defaults = settings.training;
    let params = training::TrainingParams {
        vector_size: args.vector_size.unwrap_or(defaults.vector_size),
        window: args.window.unwrap_or(defaults.window),
        min_count: args.min_count.unwrap_or(defaults.min_count),
        epochs: args.epochs.unwrap_or(defaults.epochs),
        ..defaults
    };
    let trained = training::train_directory(&args.input_path, &args.output_path, &params)
        .with_context(|| format!("training models from {}", args.input_path.display()))?;
    println!("trained {} models: {}", trained.len(), trained.join(", "));
    Ok(())
}
