//! CLI entry-point for turning parser output into role-label streams.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument, warn};

use crate::{
    data::conllu,
    nlp::annotator::{label_stream, RoleType},
};

/// Args for the `annotate` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Folder of `.conllu` files produced by the dependency parser.
    #[arg(short, long)]
    pub input_folder: PathBuf,
    /// Folder receiving `merged/`, `dep/` and `tag/` label streams.
    #[arg(short, long)]
    pub output_folder: PathBuf,
}

#[instrument]
pub fn run(args: Args) -> Result<()> {
    let written = annotate_folder(&args.input_folder, &args.output_folder)?;
    println!("wrote label streams for {written} files");
    Ok(())
}

/// Write every role-label stream for every CoNLL-U file of `input`.
pub fn annotate_folder(input: &Path, output: &Path) -> Result<usize> {
    for role_type in RoleType::ALL {
        std::fs::create_dir_all(output.join(role_type.stream_name()))?;
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input)
        .with_context(|| format!("listing {}", input.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("conllu"))
        .collect();
    files.sort();
    if files.is_empty() {
        warn!(input = %input.display(), "no .conllu files found");
    }

    for path in &files {
        let sentences = conllu::read_path(path)?;
        let Some(stem) = path.file_stem() else {
            continue;
        };
        for role_type in RoleType::ALL {
            let dest = output.join(role_type.stream_name()).join(stem);
            std::fs::write(&dest, label_stream(&sentences, role_type))
                .with_context(|| format!("writing {}", dest.display()))?;
        }
        info!(file = %path.display(), sentences = sentences.len(), "annotated");
    }
    Ok(files.len())
}
