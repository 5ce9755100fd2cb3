// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashSet, hash::Hash};

/// Swaps rows and columns. The output has one row per column of the widest input row; a
/// short input row leaves its missing cells out, so columns of a ragged matrix are
/// compacted rather than padded.
#[must_use]
pub fn array_2d_transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = matrix.iter().map(Vec::len).max().unwrap_or(0);
    let mut out: Vec<Vec<T>> = (0..width).map(|_| Vec::with_capacity(matrix.len())).collect();
    for row in matrix {
        for (column, cell) in row.iter().enumerate() {
            out[column].push(cell.clone());
        }
    }
    out
}

/// Whether `a` and `b` have the same length and the same set of distinct elements,
/// ignoring order.
pub fn has_same_elements<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let a_set: HashSet<&T> = a.iter().collect();
    let b_set: HashSet<&T> = b.iter().collect();
    a_set == b_set
}

/// Distinct elements of `items`, in order of first appearance.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> { unique_by(items, Clone::clone) }

/// Distinct `getter` results over `items`, in order of first appearance.
pub fn unique_by<T, K: Eq + Hash + Clone>(items: &[T], getter: impl Fn(&T) -> K) -> Vec<K> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(getter)
        .filter(|it| seen.insert(it.clone()))
        .collect()
}
