//! Span and subject markers embedded in input lines.
//!
//! A line marks the tokens that need vectors by enclosing them in `##`, and may
//! mark a single subject token with a leading `**` pair:
//!
//! ```text
//! The **dog** chased the ##red ball## away
//! ```

use crate::{
    errors::{Result, Role2VecError},
    nlp::tokenizer::Tokenizer,
};

/// Delimiter around spans that need vectors.
pub const SPAN_DELIMITER: &str = "##";
/// Delimiter around the subject token.
pub const SUBJECT_DELIMITER: &str = "**";

/// Whether token `index` (0-based, over the unmarked text) sits inside a
/// `##` span of `line`.
///
/// Each segment between delimiters is tokenized on its own; segments with no
/// tokens do not advance the running count. `line` must not carry subject
/// markers, see [`strip_subject`].
pub fn needs_vectors(line: &str, index: usize, tokenizer: &Tokenizer) -> bool {
    let mut seen = 0;
    for (segment_idx, segment) in line.split(SPAN_DELIMITER).enumerate() {
        let count = tokenizer.count(segment);
        if count == 0 {
            continue;
        }
        if segment_idx % 2 == 1 && (seen..seen + count).contains(&index) {
            return true;
        }
        seen += count;
        if seen > index {
            return false;
        }
    }
    false
}

/// Indices in `0..len` selected by [`needs_vectors`].
pub fn wanted_indices(line: &str, len: usize, tokenizer: &Tokenizer) -> Vec<usize> {
    (0..len)
        .filter(|&idx| needs_vectors(line, idx, tokenizer))
        .collect()
}

/// 0-based whitespace-token index of the `**` subject, if the line has one.
pub fn locate_subject(line: &str) -> Option<usize> {
    let (before, _) = line.split_once(SUBJECT_DELIMITER)?;
    let cleaned = before.replace(SPAN_DELIMITER, "").replace("  ", " ");
    Some(cleaned.split_whitespace().count())
}

/// Remove subject markers, leaving span markers in place.
pub fn strip_subject(line: &str) -> String {
    line.replace(SUBJECT_DELIMITER, "")
}

/// The sentence with every marker removed and whitespace collapsed.
pub fn unmarked_text(line: &str) -> String {
    line.replace(SPAN_DELIMITER, "")
        .replace(SUBJECT_DELIMITER, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the line marks any span at all.
pub fn has_spans(line: &str) -> bool {
    line.contains(SPAN_DELIMITER)
}

/// Reject lines whose markers cannot be paired.
pub fn validate_markup(line: &str) -> Result<()> {
    if line.matches(SPAN_DELIMITER).count() % 2 != 0 {
        return Err(malformed(line, "unbalanced `##` span markers"));
    }
    match line.matches(SUBJECT_DELIMITER).count() {
        0 | 2 => Ok(()),
        _ => Err(malformed(line, "expected exactly one `**` subject pair")),
    }
}

fn malformed(line: &str, reason: &'static str) -> Role2VecError {
    Role2VecError::MalformedMarkup {
        line: line.trim().to_string(),
        reason,
    }
}
