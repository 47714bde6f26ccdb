//! Corpus ingestion layer.

pub mod conllu;
pub mod corpus;
