use proptest::prelude::*;
use role2vec::nlp::{markup, Tokenizer};
use role2vec::Role2VecError;

fn wanted(line: &str, len: usize) -> Vec<usize> {
    markup::wanted_indices(line, len, &Tokenizer::default())
}

#[test]
fn single_span_selects_only_marked_token() {
    let tokenizer = Tokenizer::default();
    let line = "The ##cat## sat";
    assert!(!markup::needs_vectors(line, 0, &tokenizer));
    assert!(markup::needs_vectors(line, 1, &tokenizer));
    assert!(!markup::needs_vectors(line, 2, &tokenizer));
}

#[test]
fn several_spans_are_all_selected() {
    assert_eq!(wanted("##A## b ##c d## e", 5), vec![0, 2, 3]);
}

#[test]
fn punctuation_after_a_span_counts_as_its_own_token() {
    assert_eq!(wanted("I saw ##it##. Then left", 6), vec![2]);
}

#[test]
fn whitespace_only_segments_do_not_advance_the_count() {
    assert_eq!(wanted("##red## ##ball## rolled", 3), vec![0, 1]);
}

#[test]
fn subject_index_counts_words_before_the_marker() {
    assert_eq!(markup::locate_subject("The **dog** chased ##the ball##"), Some(1));
    assert_eq!(markup::locate_subject("**Dogs** ##bark##"), Some(0));
    assert_eq!(markup::locate_subject("Big  ##red## **dog**"), Some(2));
    assert_eq!(markup::locate_subject("No subject ##here##"), None);
}

#[test]
fn unmarked_text_drops_markers_and_extra_spaces() {
    assert_eq!(
        markup::unmarked_text("The **dog**  chased ##the ball## \n"),
        "The dog chased the ball"
    );
}

#[test]
fn unbalanced_markers_are_rejected() {
    assert!(matches!(
        markup::validate_markup("The ##cat sat"),
        Err(Role2VecError::MalformedMarkup { .. })
    ));
    assert!(matches!(
        markup::validate_markup("**a** and **b** ##c##"),
        Err(Role2VecError::MalformedMarkup { .. })
    ));
    assert!(markup::validate_markup("The **dog** ##ran##").is_ok());
}

proptest! {
    #[test]
    fn lines_without_spans_select_nothing(line in "[A-Za-z ,.'*]{0,60}", index in 0usize..30) {
        prop_assert!(!markup::needs_vectors(&line, index, &Tokenizer::default()));
    }
}
