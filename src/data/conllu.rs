//! Reader for CoNLL-U files written by the external dependency parser.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::{Result, Role2VecError},
    nlp::annotator::{AnnotatedSentence, AnnotatedToken},
};

const ID: usize = 0;
const FORM: usize = 1;
const UPOS: usize = 3;
const XPOS: usize = 4;
const HEAD: usize = 6;
const DEPREL: usize = 7;
const MIN_COLUMNS: usize = 8;

/// `key = value` or bare `key` comment lines, e.g. `text = ...` or `newpar`.
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_]+)(?:\s+id)?\s*(?:=\s*(.*?))?\s*$").expect("valid comment regex")
});

/// Read every sentence from a CoNLL-U file on disk.
pub fn read_path(path: &Path) -> Result<Vec<AnnotatedSentence>> {
    let file = File::open(path).map_err(|err| Role2VecError::from(err).at_path(path))?;
    read(BufReader::new(file)).map_err(|err| err.at_path(path))
}

/// Read every sentence from CoNLL-U text.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<AnnotatedSentence>> {
    let mut sentences = Vec::new();
    let mut pending = Pending::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            pending.flush(&mut sentences);
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            pending.comment(comment.trim());
            continue;
        }
        pending.row(line, line_no + 1)?;
    }
    pending.flush(&mut sentences);

    debug!(sentences = sentences.len(), "parsed conllu");
    Ok(sentences)
}

#[derive(Default)]
struct Pending {
    text: Option<String>,
    new_paragraph: bool,
    tokens: Vec<AnnotatedToken>,
}

impl Pending {
    fn comment(&mut self, comment: &str) {
        let Some(caps) = COMMENT.captures(comment) else {
            return;
        };
        match &caps[1] {
            "text" => {
                if let Some(text) = caps.get(2) {
                    self.text = Some(text.as_str().to_string());
                }
            }
            "newpar" | "newdoc" => self.new_paragraph = true,
            _ => {}
        }
    }

    fn row(&mut self, line: &str, line_no: usize) -> Result<()> {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < MIN_COLUMNS {
            return Err(bad_row(line_no, "expected at least 8 tab separated columns"));
        }
        // Multi-word ranges and empty nodes carry no head of their own.
        if cols[ID].contains('-') || cols[ID].contains('.') {
            return Ok(());
        }
        let id: usize = cols[ID]
            .parse()
            .map_err(|_| bad_row(line_no, "token id is not an integer"))?;
        let head: usize = cols[HEAD]
            .parse()
            .map_err(|_| bad_row(line_no, "head is not an integer"))?;
        if id == 0 || id != self.tokens.len() + 1 {
            return Err(bad_row(line_no, "token ids must count up from 1"));
        }

        let index = id - 1;
        let tag = if cols[XPOS] == "_" { cols[UPOS] } else { cols[XPOS] };
        self.tokens.push(AnnotatedToken {
            text: cols[FORM].to_string(),
            index,
            tag: tag.to_string(),
            dep: cols[DEPREL].to_string(),
            head: if head == 0 { index } else { head - 1 },
        });
        Ok(())
    }

    fn flush(&mut self, out: &mut Vec<AnnotatedSentence>) {
        let pending = std::mem::take(self);
        if pending.tokens.is_empty() {
            // A paragraph marker on an empty block still applies to the next sentence.
            self.new_paragraph = pending.new_paragraph;
            return;
        }
        let text = pending.text.unwrap_or_else(|| {
            pending
                .tokens
                .iter()
                .map(|token| token.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });
        out.push(AnnotatedSentence {
            text,
            tokens: pending.tokens,
            new_paragraph: pending.new_paragraph,
        });
    }
}

fn bad_row(line_no: usize, reason: &str) -> Role2VecError {
    Role2VecError::model_load("<conllu>", format!("line {line_no}: {reason}"))
}
