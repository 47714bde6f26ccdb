//! Command-line interface wiring for role2vec.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub use crate::nlp::annotator::RoleType;

pub mod annotate;
pub mod parse_corpus;
pub mod train;
pub mod unmark;
pub mod vectors;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Role embeddings and composite span vectors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::ParseCorpus(args) => parse_corpus::run(args),
            Commands::Annotate(args) => annotate::run(args),
            Commands::Train(args) => train::run(args, settings),
            Commands::Unmark(args) => unmark::run(args),
            Commands::Vectors(args) => vectors::run(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn zipped tab-separated corpus files into plain text.
    ParseCorpus(parse_corpus::Args),
    /// Convert parser output (CoNLL-U) into role-label streams.
    Annotate(annotate::Args),
    /// Train one role embedding model per label stream folder.
    Train(train::Args),
    /// Strip span and subject markers so the sentences can be parsed.
    Unmark(unmark::Args),
    /// Compute composite vectors for marked spans.
    Vectors(vectors::Args),
}
