//! CLI entry-point for composite vector extraction.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::RoleType,
    config::Settings,
    vectors::{self, BlendWeights, VectorJob},
};

/// Args for the `vectors` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Sentences with the wanted words enclosed between `##`.
    #[arg(short, long)]
    pub text_path: PathBuf,
    /// Word embedding model.
    #[arg(short, long)]
    pub w2v_path: PathBuf,
    /// Role embedding model.
    #[arg(short, long)]
    pub r2v_path: PathBuf,
    /// CoNLL-U parses of the unmarked sentences.
    #[arg(short, long)]
    pub parses_path: PathBuf,
    /// Distance vector table (JSON).
    #[arg(short, long)]
    pub distance_path: PathBuf,
    /// Where the JSON result map is written.
    #[arg(short, long)]
    pub output_path: PathBuf,
    /// Role label construction matching the role model.
    #[arg(long, value_enum, alias = "r2v_type")]
    pub r2v_type: Option<RoleType>,
    /// Weight of the role vector.
    #[arg(short, long)]
    pub alpha: Option<f32>,
    /// Weight of the distance vector.
    #[arg(short, long)]
    pub beta: Option<f32>,
}

#[instrument(skip(settings))]
pub fn run(args: Args, settings: Settings) -> Result<()> {
    let job = VectorJob {
        role_type: args.r2v_type.unwrap_or(settings.role_type),
        weights: BlendWeights {
            alpha: args.alpha.unwrap_or(settings.alpha),
            beta: args.beta.unwrap_or(settings.beta),
        },
        text_path: args.text_path,
        w2v_path: args.w2v_path,
        r2v_path: args.r2v_path,
        parses_path: args.parses_path,
        distance_path: args.distance_path,
        output_path: args.output_path,
    };
    let results = vectors::compute(&job, &settings)?;
    println!(
        "wrote vectors for {} sentences to {}",
        results.len(),
        job.output_path.display()
    );
    Ok(())
}
