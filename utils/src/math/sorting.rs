// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cmp::Ordering, collections::BTreeMap};

/// Orders two values for a sort. `NaN` sorts after every number in ascending order.
pub type Comparator = fn(f64, f64) -> Ordering;

#[must_use]
pub fn sort_asc(a: f64, b: f64) -> Ordering { a.total_cmp(&b) }

#[must_use]
pub fn sort_desc(a: f64, b: f64) -> Ordering { b.total_cmp(&a) }

#[derive(Debug, Clone, Copy)]
pub struct SortOptions {
    pub comparator: Comparator,
    /// Leave `NaN` values out of the result instead of sorting them.
    pub ignore_nan: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            comparator: sort_asc,
            ignore_nan: false,
        }
    }
}

impl SortOptions {
    #[must_use]
    pub fn descending() -> Self {
        Self {
            comparator: sort_desc,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn ignoring_nan(self) -> Self {
        Self {
            ignore_nan: true,
            ..self
        }
    }
}

/// Sorted `(key, value)` pairs, stable.
fn sorted_entries<K: Clone>(
    entries: impl Iterator<Item = (K, f64)>,
    options: SortOptions,
) -> Vec<(K, f64)> {
    let mut it: Vec<(K, f64)> = entries
        .filter(|(_, value)| !(options.ignore_nan && value.is_nan()))
        .collect();
    it.sort_by(|(_, a), (_, b)| (options.comparator)(*a, *b));
    it
}

/// Indices of `values`, in the order that sorts `values`.
///
/// ```rust
/// use flex_utils::{SortOptions, arg_sort};
///
/// let values = [9.0, 5.0, 11.0, -1.0, 0.0];
/// assert_eq!(arg_sort(&values, SortOptions::default()), vec![3, 4, 1, 0, 2]);
/// ```
#[must_use]
pub fn arg_sort(values: &[f64], options: SortOptions) -> Vec<usize> {
    sorted_entries(values.iter().copied().enumerate(), options)
        .into_iter()
        .map(|(index, _)| index)
        .collect()
}

/// The position that each element of `values` would have once sorted. Elements left out
/// by [`SortOptions::ignore_nan`] get `None`.
///
/// ```rust
/// use flex_utils::{SortOptions, sort_pos};
///
/// let values = [9.0, 5.0, 11.0, -1.0, 0.0];
/// let positions: Vec<usize> = sort_pos(&values, SortOptions::default())
///     .into_iter()
///     .flatten()
///     .collect();
/// assert_eq!(positions, vec![3, 2, 4, 0, 1]);
/// ```
#[must_use]
pub fn sort_pos(values: &[f64], options: SortOptions) -> Vec<Option<usize>> {
    let mut return_it = vec![None; values.len()];
    for (position, (index, _)) in
        sorted_entries(values.iter().copied().enumerate(), options)
            .into_iter()
            .enumerate()
    {
        return_it[index] = Some(position);
    }
    return_it
}

/// Same as [`sort_pos`] for keyed values. Keys left out by [`SortOptions::ignore_nan`]
/// are missing from the result.
#[must_use]
pub fn sort_pos_map<K: Ord + Clone>(
    values: &BTreeMap<K, f64>,
    options: SortOptions,
) -> BTreeMap<K, usize> {
    sorted_entries(values.iter().map(|(k, v)| (k.clone(), *v)), options)
        .into_iter()
        .enumerate()
        .map(|(position, (key, _))| (key, position))
        .collect()
}
