//! Error taxonomy shared by the library layers.

use std::path::{Path, PathBuf};

/// Result alias defaulting to [`Role2VecError`].
pub type Result<T, E = Role2VecError> = std::result::Result<T, E>;

/// Failures raised while annotating, measuring and composing vectors.
#[derive(Debug, thiserror::Error)]
pub enum Role2VecError {
    /// A word or role label is absent from an embedding model.
    #[error("`{key}` is not in the {model} vocabulary")]
    MissingVocabulary { model: &'static str, key: String },

    /// Two tokens have no shared ancestor in the dependency tree.
    #[error("tokens {base} and {reference} share no ancestor in the dependency tree")]
    DisconnectedTree { base: usize, reference: usize },

    /// Following head links from a token never reaches a root.
    #[error("head chain starting at token {index} never reaches a root")]
    CyclicTree { index: usize },

    /// A head reference points outside the sentence.
    #[error("token {index} points at head {head} outside a sentence of {len} tokens")]
    InvalidHead { index: usize, head: usize, len: usize },

    /// A token index is outside the sentence.
    #[error("token index {index} is outside a sentence of {len} tokens")]
    TokenOutOfRange { index: usize, len: usize },

    /// The `##` / `**` markers of a line are unbalanced.
    #[error("malformed markup in `{line}`: {reason}")]
    MalformedMarkup { line: String, reason: &'static str },

    /// The distance table has no vector for a computed distance.
    #[error("no distance vector for distance {0}")]
    MissingDistance(usize),

    /// Role and distance vectors cannot be blended element-wise.
    #[error("cannot blend a role vector of length {role} with a distance vector of length {distance}")]
    DimensionMismatch { role: usize, distance: usize },

    /// The annotator holds no parse for a sentence.
    #[error("no parse available for sentence `{0}`")]
    MissingAnnotation(String),

    /// A model or table file could not be read or understood.
    #[error("failed to load {}: {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    /// A model or table file could not be opened or decoded.
    #[error("failed to read {}", path.display())]
    ModelRead {
        path: PathBuf,
        #[source]
        source: Box<Role2VecError>,
    },

    /// Nothing survives the training vocabulary threshold.
    #[error("training corpus has no token occurring at least {min_count} times")]
    EmptyVocabulary { min_count: usize },

    /// A training hyper-parameter is out of range.
    #[error("invalid training parameter: {0}")]
    InvalidParameter(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Role2VecError {
    /// Shorthand for a [`Role2VecError::ModelLoad`] on `path`.
    pub fn model_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ModelLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Attach `path` to a load failure, keeping I/O and JSON causes as the
    /// error source.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            Self::ModelLoad { reason, .. } => Self::model_load(path, reason),
            other => Self::ModelRead {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }
}
