#![allow(dead_code)]

use role2vec::nlp::AnnotatedToken;

/// One CoNLL-U token row: id, form, xpos, head (1-based, 0 for root), deprel.
pub fn row(id: usize, form: &str, xpos: &str, head: usize, dep: &str) -> String {
    format!("{id}\t{form}\t{}\t_\t{xpos}\t_\t{head}\t{dep}\t_\t_", form.to_lowercase())
}

/// "The dog chased the ball", rooted at "chased".
pub fn chased_conllu() -> String {
    [
        "# text = The dog chased the ball".to_string(),
        row(1, "The", "DT", 2, "det"),
        row(2, "dog", "NN", 3, "nsubj"),
        row(3, "chased", "VBD", 0, "ROOT"),
        row(4, "the", "DT", 5, "det"),
        row(5, "ball", "NN", 3, "dobj"),
        String::new(),
    ]
    .join("\n")
}

/// Tokens with the given 0-based heads; a token whose head is itself is a root.
pub fn tokens_with_heads(heads: &[usize]) -> Vec<AnnotatedToken> {
    heads
        .iter()
        .enumerate()
        .map(|(index, &head)| AnnotatedToken {
            text: format!("w{index}"),
            index,
            tag: "NN".into(),
            dep: "dep".into(),
            head,
        })
        .collect()
}
