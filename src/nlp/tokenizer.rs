//! Rule-based English tokenizer used to count tokens inside marked segments.

use std::collections::HashSet;

/// Clitics split off the end of a word, matched case-insensitively.
pub const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

const PREFIX_PUNCT: &[char] = &['"', '\'', '(', '[', '{'];
const SUFFIX_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\''];

/// Splits text the way the external parser does: whitespace first, then
/// surrounding punctuation, then a trailing clitic.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    exceptions: HashSet<String>,
}

impl Tokenizer {
    /// Build a tokenizer that never splits the given words.
    pub fn new<I, S>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            exceptions: exceptions
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_exception(&self, word: &str) -> bool {
        !self.exceptions.is_empty() && self.exceptions.contains(&word.to_lowercase())
    }

    /// Tokenize `text`, returning slices into it.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }
        tokens
    }

    /// Number of tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }

    fn split_chunk<'a>(&self, chunk: &'a str, out: &mut Vec<&'a str>) {
        if self.is_exception(chunk) || is_clitic(chunk) {
            out.push(chunk);
            return;
        }

        let mut start = 0;
        let mut end = chunk.len();
        while let Some(c) = chunk[start..end].chars().next() {
            if !PREFIX_PUNCT.contains(&c) {
                break;
            }
            out.push(&chunk[start..start + c.len_utf8()]);
            start += c.len_utf8();
        }

        let mut trailing = Vec::new();
        while let Some(c) = chunk[start..end].chars().next_back() {
            if !SUFFIX_PUNCT.contains(&c) {
                break;
            }
            trailing.push(&chunk[end - c.len_utf8()..end]);
            end -= c.len_utf8();
        }

        let core = &chunk[start..end];
        if !core.is_empty() {
            match clitic_split(core) {
                Some(cut) if !self.is_exception(core) => {
                    out.push(&core[..cut]);
                    out.push(&core[cut..]);
                }
                _ => out.push(core),
            }
        }
        out.extend(trailing.into_iter().rev());
    }
}

fn is_clitic(word: &str) -> bool {
    CLITICS.iter().any(|c| word.eq_ignore_ascii_case(c))
}

/// Byte offset where a trailing clitic starts, if the word has one and
/// something remains in front of it.
fn clitic_split(word: &str) -> Option<usize> {
    let lower = word.to_ascii_lowercase();
    CLITICS
        .iter()
        .find(|clitic| lower.len() > clitic.len() && lower.ends_with(*clitic))
        .map(|clitic| word.len() - clitic.len())
}

/// Normalise a token into its word-model key: lowercase, clitic removed,
/// surrounding punctuation trimmed. A bare clitic is its own key.
pub fn lookup_key(text: &str) -> String {
    let lower = text.to_lowercase();
    if is_clitic(&lower) {
        return lower;
    }
    let stem = CLITICS
        .iter()
        .find_map(|clitic| lower.strip_suffix(clitic).filter(|rest| !rest.is_empty()))
        .unwrap_or(lower.as_str());
    let trimmed = stem.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        lower.clone()
    } else {
        trimmed.to_string()
    }
}
