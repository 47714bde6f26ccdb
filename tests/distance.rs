mod common;

use proptest::prelude::*;
use role2vec::nlp::DependencyTree;
use role2vec::Role2VecError;

use common::tokens_with_heads;

// 0:The -> 1:dog -> 2:chased (root) <- 4:ball <- 3:the
fn chased_tree() -> DependencyTree {
    DependencyTree::build(&tokens_with_heads(&[1, 2, 2, 4, 2])).unwrap()
}

#[test]
fn ancestors_are_nearest_first() {
    let tree = chased_tree();
    assert_eq!(tree.ancestors(0).unwrap(), &[1, 2]);
    assert_eq!(tree.ancestors(3).unwrap(), &[4, 2]);
    assert!(tree.ancestors(2).unwrap().is_empty());
}

#[test]
fn same_token_is_at_distance_zero() {
    assert_eq!(chased_tree().distance(1, 1).unwrap(), 0);
}

#[test]
fn parent_and_child_are_at_distance_one() {
    let tree = chased_tree();
    assert_eq!(tree.distance(1, 2).unwrap(), 1);
    assert_eq!(tree.distance(2, 1).unwrap(), 1);
}

#[test]
fn grandparent_uses_depth_in_the_descendant_path() {
    assert_eq!(chased_tree().distance(0, 2).unwrap(), 2);
}

#[test]
fn cousins_sum_depths_to_the_shared_ancestor() {
    let tree = chased_tree();
    assert_eq!(tree.distance(1, 4).unwrap(), 2);
    assert_eq!(tree.distance(0, 3).unwrap(), 4);
}

#[test]
fn separate_roots_are_disconnected() {
    let tree = DependencyTree::build(&tokens_with_heads(&[0, 0, 2, 2])).unwrap();
    assert!(matches!(
        tree.distance(1, 3),
        Err(Role2VecError::DisconnectedTree { base: 1, reference: 3 })
    ));
}

#[test]
fn head_cycles_are_reported() {
    assert!(matches!(
        DependencyTree::build(&tokens_with_heads(&[1, 0, 2])),
        Err(Role2VecError::CyclicTree { .. })
    ));
}

#[test]
fn heads_outside_the_sentence_are_reported() {
    assert!(matches!(
        DependencyTree::build(&tokens_with_heads(&[0, 7])),
        Err(Role2VecError::InvalidHead { index: 1, head: 7, .. })
    ));
}

#[test]
fn out_of_range_tokens_are_reported() {
    assert!(matches!(
        chased_tree().distance(0, 9),
        Err(Role2VecError::TokenOutOfRange { index: 9, len: 5 })
    ));
}

fn random_tree() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<prop::sample::Index>(), 1..16).prop_map(|picks| {
        picks
            .iter()
            .enumerate()
            .map(|(i, pick)| if i == 0 { 0 } else { pick.index(i) })
            .collect()
    })
}

proptest! {
    #[test]
    fn distance_is_symmetric(heads in random_tree()) {
        let tree = DependencyTree::build(&tokens_with_heads(&heads)).unwrap();
        for a in 0..heads.len() {
            for b in 0..heads.len() {
                prop_assert_eq!(tree.distance(a, b).unwrap(), tree.distance(b, a).unwrap());
            }
        }
    }

    #[test]
    fn every_child_is_one_step_from_its_head(heads in random_tree()) {
        let tree = DependencyTree::build(&tokens_with_heads(&heads)).unwrap();
        for (child, &head) in heads.iter().enumerate().skip(1) {
            prop_assert_eq!(tree.distance(child, head).unwrap(), 1);
        }
    }
}
