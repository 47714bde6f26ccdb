//! Natural language processing layer: tokenization, parses, markers,
//! dependency distances and embeddings.

pub mod annotator;
pub mod embeddings;
pub mod markup;
pub mod tokenizer;
pub mod training;
pub mod tree;

pub use annotator::{AnnotatedSentence, AnnotatedToken, Annotator, ConlluAnnotator};
pub use embeddings::KeyedVectors;
pub use tokenizer::Tokenizer;
pub use tree::DependencyTree;
