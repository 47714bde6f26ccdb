//! Syntactic annotations produced by the external parser, and the role labels
//! derived from them.

use std::{collections::HashMap, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    data::conllu,
    errors::{Result, Role2VecError},
};

/// Suffix the parser appends to passive-voice dependency labels.
pub const PASSIVE_MARKER: &str = "pass";

/// A token as tagged and parsed by the external annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    /// 0-based position in the sentence.
    pub index: usize,
    pub tag: String,
    pub dep: String,
    /// Position of the syntactic head; equals `index` for the root.
    pub head: usize,
}

impl AnnotatedToken {
    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

/// One parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub text: String,
    pub tokens: Vec<AnnotatedToken>,
    /// The sentence opens a new paragraph in its source document.
    #[serde(default)]
    pub new_paragraph: bool,
}

/// Source of syntactic annotations.
///
/// One instance is created per run and handed to every component by reference.
pub trait Annotator {
    fn annotate(&self, sentence: &str) -> Result<AnnotatedSentence>;
}

/// Annotator serving parses read from a CoNLL-U file, looked up by sentence text.
#[derive(Debug, Default)]
pub struct ConlluAnnotator {
    sentences: HashMap<String, AnnotatedSentence>,
}

impl ConlluAnnotator {
    pub fn new(sentences: impl IntoIterator<Item = AnnotatedSentence>) -> Self {
        let sentences = sentences
            .into_iter()
            .map(|sentence| (normalise_key(&sentence.text), sentence))
            .collect();
        Self { sentences }
    }

    /// Read every sentence of a CoNLL-U file.
    pub fn load(path: &Path) -> Result<Self> {
        let sentences = conllu::read_path(path)?;
        info!(path = %path.display(), sentences = sentences.len(), "loaded parses");
        Ok(Self::new(sentences))
    }

    pub fn from_conllu_str(text: &str) -> Result<Self> {
        Ok(Self::new(conllu::read(text.as_bytes())?))
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl Annotator for ConlluAnnotator {
    fn annotate(&self, sentence: &str) -> Result<AnnotatedSentence> {
        self.sentences
            .get(&normalise_key(sentence))
            .cloned()
            .ok_or_else(|| Role2VecError::MissingAnnotation(sentence.to_string()))
    }
}

fn normalise_key(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Dependency label with a trailing passive marker removed.
pub fn normalise_dependency(dep: &str) -> &str {
    match dep.strip_suffix(PASSIVE_MARKER) {
        Some(active) if !active.is_empty() => active.strip_suffix(':').unwrap_or(active),
        _ => dep,
    }
}

/// How a token's role label is built from its annotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RoleType {
    /// Tag and dependency joined by an underscore, e.g. `NN_nsubj`.
    #[default]
    Merged,
    /// Dependency relation only.
    #[value(aliases = ["dependence", "dep"])]
    Dependency,
    /// Fine-grained part-of-speech tag only.
    Tag,
}

impl RoleType {
    /// Folder name used for this label stream on disk.
    pub fn stream_name(self) -> &'static str {
        match self {
            Self::Merged => "merged",
            Self::Dependency => "dep",
            Self::Tag => "tag",
        }
    }

    pub const ALL: [RoleType; 3] = [Self::Merged, Self::Dependency, Self::Tag];
}

/// Role label of `token` under the chosen construction.
pub fn role_label(token: &AnnotatedToken, role_type: RoleType) -> String {
    let dep = normalise_dependency(&token.dep);
    match role_type {
        RoleType::Merged => format!("{}_{}", token.tag, dep),
        RoleType::Dependency => dep.to_string(),
        RoleType::Tag => token.tag.clone(),
    }
}

/// Render sentences as a role-label stream: labels separated by spaces,
/// sentences of a paragraph by `". "`, paragraphs by newlines.
pub fn label_stream(sentences: &[AnnotatedSentence], role_type: RoleType) -> String {
    let mut paragraphs: Vec<Vec<String>> = Vec::new();
    for sentence in sentences {
        let labels = sentence
            .tokens
            .iter()
            .map(|token| role_label(token, role_type))
            .collect::<Vec<_>>()
            .join(" ");
        match paragraphs.last_mut() {
            Some(paragraph) if !sentence.new_paragraph => paragraph.push(labels),
            _ => paragraphs.push(vec![labels]),
        }
    }
    paragraphs
        .iter()
        .map(|paragraph| paragraph.join(". "))
        .collect::<Vec<_>>()
        .join("\n")
}
