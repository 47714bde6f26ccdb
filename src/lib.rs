//! Role embeddings and composite span vectors over dependency-parsed text.

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod logging;
pub mod nlp;
pub mod vectors;

pub use errors::{Result, Role2VecError};
