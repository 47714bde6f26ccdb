//! Ancestor paths over the dependency-head relation and the syntactic
//! distance derived from them.

use crate::{
    errors::{Result, Role2VecError},
    nlp::annotator::AnnotatedToken,
};

/// For every token of a sentence, its ancestors ordered nearest-first
/// (parent, grandparent, ..., root). Roots have an empty path.
///
/// Tokens are identified by sentence position, which also tells apart
/// repeated words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    ancestors: Vec<Vec<usize>>,
}

impl DependencyTree {
    /// Follow head links from every token until a token that is its own head.
    pub fn build(tokens: &[AnnotatedToken]) -> Result<Self> {
        let len = tokens.len();
        let mut ancestors = Vec::with_capacity(len);
        for (index, token) in tokens.iter().enumerate() {
            let mut path = Vec::new();
            let mut current = token;
            while !current.is_root() {
                let head = current.head;
                if head >= len {
                    return Err(Role2VecError::InvalidHead {
                        index: current.index,
                        head,
                        len,
                    });
                }
                // A path longer than the sentence can only come from a cycle.
                if path.len() >= len {
                    return Err(Role2VecError::CyclicTree { index });
                }
                path.push(head);
                current = &tokens[head];
            }
            ancestors.push(path);
        }
        Ok(Self { ancestors })
    }

    pub fn len(&self) -> usize {
        self.ancestors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Ancestors of `index`, nearest first.
    pub fn ancestors(&self, index: usize) -> Result<&[usize]> {
        self.ancestors
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Role2VecError::TokenOutOfRange {
                index,
                len: self.ancestors.len(),
            })
    }

    /// Syntactic distance between `base` and `reference`.
    ///
    /// Zero for the same token; the 1-based depth of the ancestor when one
    /// dominates the other; otherwise the sum of both 1-based depths of the
    /// first ancestor of `base` that also appears among the ancestors of
    /// `reference`.
    pub fn distance(&self, base: usize, reference: usize) -> Result<usize> {
        let base_path = self.ancestors(base)?;
        let reference_path = self.ancestors(reference)?;
        if base == reference {
            return Ok(0);
        }
        if let Some(pos) = reference_path.iter().position(|&a| a == base) {
            return Ok(pos + 1);
        }
        if let Some(pos) = base_path.iter().position(|&a| a == reference) {
            return Ok(pos + 1);
        }
        base_path
            .iter()
            .enumerate()
            .find_map(|(base_pos, ancestor)| {
                reference_path
                    .iter()
                    .position(|a| a == ancestor)
                    .map(|reference_pos| base_pos + 1 + reference_pos + 1)
            })
            .ok_or(Role2VecError::DisconnectedTree { base, reference })
    }
}
