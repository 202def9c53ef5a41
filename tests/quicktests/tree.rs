use cmp_bst::{Natural, Reversed, Tree};

use std::collections::HashSet;

#[quickcheck]
fn size_counts_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for (inserted, x) in xs.iter().enumerate() {
        tree.insert(*x);
        if tree.size() != inserted + 1 || tree.is_empty() {
            return false;
        }
    }

    tree.size() == xs.len() && tree.is_empty() == xs.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn stays_contained_after_more_inserts(first: i16, rest: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    tree.insert(first);

    rest.into_iter().all(|x| {
        tree.insert(x);
        tree.contains(&first)
    })
}

#[quickcheck]
fn reversed_agrees_on_membership(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let natural: Tree<_> = xs.iter().copied().collect();
    let mut reversed = Tree::with_comparator(Reversed(Natural));
    reversed.extend(xs.iter().copied());

    natural.size() == reversed.size()
        && probes
            .iter()
            .chain(&xs)
            .all(|x| natural.contains(x) == reversed.contains(x))
}

#[quickcheck]
fn compare_fn_agrees_with_comparator(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let mut signed = Tree::with_compare_fn(|a: &i8, b: &i8| i32::from(*a) - i32::from(*b));
    let mut closure = Tree::with_comparator(|a: &i8, b: &i8| a.cmp(b));
    for x in &xs {
        signed.insert(*x);
        closure.insert(*x);
    }

    probes.iter().all(|x| signed.contains(x) == closure.contains(x))
}
