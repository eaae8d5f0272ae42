use unbalanced_bst::Tree;

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::init_logging;

/// Builds a tree rooted at `root` from `xs`, skipping values already present.
fn build(root: i8, xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new(root);
    for x in xs {
        let _ = tree.insert(*x);
    }
    tree
}

/// The expected rendering of a set: ascending, one value per line.
fn listing(values: &BTreeSet<i8>) -> String {
    values.iter().map(|x| format!("{}\n", x)).collect()
}

#[test]
fn sample_scenario() {
    init_logging();

    let mut tree = Tree::new(5);
    for x in [3, 8, 1, 4, 7, 9] {
        tree.insert(x).unwrap();
    }

    assert_eq!(tree.render(), "1\n3\n4\n5\n7\n8\n9\n");
    assert_eq!(tree.find(&4), Some(&4));
    assert_eq!(tree.find(&6), None);

    let err = tree.insert(8).unwrap_err();
    assert_eq!(err.value(), &8);
    assert_eq!(err.to_string(), "value 8 is already in the tree");
}

#[quickcheck]
fn renders_in_ascending_order(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);
    let mut expected: BTreeSet<_> = xs.into_iter().collect();
    expected.insert(root);

    tree.render() == listing(&expected)
}

#[quickcheck]
fn contains(root: i8, xs: Vec<i8>) -> bool {
    let tree = build(root, &xs);

    tree.find(&root) == Some(&root) && xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(root: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(root, &xs);
    let mut added: BTreeSet<_> = xs.into_iter().collect();
    added.insert(root);
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn duplicates_are_rejected(root: i8, xs: Vec<i8>) -> bool {
    init_logging();

    let mut tree = build(root, &xs);
    let before = tree.render();
    let len = tree.len();

    let all_rejected = std::iter::once(root)
        .chain(xs)
        .all(|x| matches!(tree.insert(x), Err(e) if *e.value() == x));

    all_rejected && tree.render() == before && tree.len() == len
}

#[quickcheck]
fn insertion_order_does_not_change_contents(root: i8, xs: Vec<i8>) -> bool {
    let forward = build(root, &xs);
    let reversed: Vec<_> = xs.iter().rev().copied().collect();
    let backward = build(root, &reversed);

    forward.render() == backward.render() && forward.len() == backward.len()
}

#[test]
fn sorted_insert_degrades_to_a_list() {
    let mut tree = Tree::new(0u16);
    for x in 1..1000 {
        tree.insert(x).unwrap();
    }

    assert_eq!(tree.height(), 1000);
    assert_eq!(tree.len(), 1000);
}
