//! Composite vectors for marked tokens: a word embedding paired with a role
//! embedding blended with a distance vector.

use std::path::Path;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::{Result, Role2VecError},
    nlp::{
        annotator::{role_label, Annotator, RoleType},
        embeddings::KeyedVectors,
        markup,
        tokenizer::{lookup_key, Tokenizer},
        tree::DependencyTree,
    },
    vectors::distance::DistanceTable,
};

/// Weights of the syntactic blend `alpha * role + beta * distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub alpha: f32,
    pub beta: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            alpha: 0.8,
            beta: 0.2,
        }
    }
}

/// Element-wise `alpha * role + beta * distance`.
pub fn blend(
    role: ArrayView1<'_, f32>,
    distance: ArrayView1<'_, f32>,
    weights: BlendWeights,
) -> Result<Array1<f32>> {
    if role.len() != distance.len() {
        return Err(Role2VecError::DimensionMismatch {
            role: role.len(),
            distance: distance.len(),
        });
    }
    Ok(&role * weights.alpha + &distance * weights.beta)
}

/// Output record for one marked token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeVector {
    pub word: String,
    /// 1-based position in the sentence.
    pub index: usize,
    pub semantic: Vec<f32>,
    pub syntactic: Vec<f32>,
}

/// Models held read-only for a whole run.
#[derive(Debug, Clone)]
pub struct VectorModels {
    pub words: KeyedVectors,
    pub roles: KeyedVectors,
    pub distances: DistanceTable,
}

impl VectorModels {
    pub fn load(words: &Path, roles: &Path, distances: &Path) -> Result<Self> {
        Ok(Self {
            words: KeyedVectors::load(words)?,
            roles: KeyedVectors::load(roles)?,
            distances: DistanceTable::load(distances)?,
        })
    }
}

/// A line reduced to its sentence and the records of its marked tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLine {
    pub sentence: String,
    pub vectors: Vec<CompositeVector>,
}

/// Composes vectors for the marked tokens of one line at a time.
pub struct VectorComposer<'a> {
    annotator: &'a dyn Annotator,
    tokenizer: &'a Tokenizer,
    models: &'a VectorModels,
    role_type: RoleType,
    weights: BlendWeights,
}

impl<'a> VectorComposer<'a> {
    pub fn new(
        annotator: &'a dyn Annotator,
        tokenizer: &'a Tokenizer,
        models: &'a VectorModels,
        role_type: RoleType,
        weights: BlendWeights,
    ) -> Self {
        Self {
            annotator,
            tokenizer,
            models,
            role_type,
            weights,
        }
    }

    /// Compose records for every `##`-marked token of `line`.
    ///
    /// Tokens missing from either embedding model are skipped with a warning.
    /// Distances are measured to the `**` subject when the line has one, and
    /// are the token position otherwise.
    pub fn compose_line(&self, line: &str) -> Result<ComposedLine> {
        markup::validate_markup(line)?;
        let sentence = markup::unmarked_text(line);
        let span_line = markup::strip_subject(line);
        let subject = markup::locate_subject(line);

        let parsed = self.annotator.annotate(&sentence)?;
        let tree = DependencyTree::build(&parsed.tokens)?;

        let mut vectors = Vec::new();
        for token in &parsed.tokens {
            if !markup::needs_vectors(&span_line, token.index, self.tokenizer) {
                continue;
            }

            let role = role_label(token, self.role_type);
            let key = lookup_key(&token.text);
            let looked_up = lookup(&self.models.roles, "role", &role).and_then(|role_vector| {
                lookup(&self.models.words, "word", &key).map(|semantic| (role_vector, semantic))
            });
            let (role_vector, semantic) = match looked_up {
                Ok(found) => found,
                Err(err @ Role2VecError::MissingVocabulary { .. }) => {
                    warn!(%err, word = %token.text, index = token.index, "skipping token");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let distance = match subject {
                Some(subject) => tree.distance(token.index, subject)?,
                None => token.index,
            };
            let distance_vector = self.models.distances.get(distance)?;
            let syntactic = blend(role_vector, distance_vector, self.weights)?;

            debug!(word = %token.text, %role, distance, "composed vector");
            vectors.push(CompositeVector {
                word: token.text.clone(),
                index: token.index + 1,
                semantic: semantic.to_vec(),
                syntactic: syntactic.to_vec(),
            });
        }

        Ok(ComposedLine { sentence, vectors })
    }
}

fn lookup<'m>(
    model: &'m KeyedVectors,
    name: &'static str,
    key: &str,
) -> Result<ArrayView1<'m, f32>> {
    model
        .get(key)
        .ok_or_else(|| Role2VecError::MissingVocabulary {
            model: name,
            key: key.to_string(),
        })
}
