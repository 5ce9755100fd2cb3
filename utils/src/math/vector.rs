// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numerical vector helpers over `&[f64]`.
//!
//! The "sum like" functions skip `NaN` values, and the min / max functions never pick a
//! `NaN` since every comparison with it is false.

use std::collections::BTreeSet;

/// A reducer step: `(accumulator, value) -> accumulator`.
pub type Aggregator = fn(f64, f64) -> f64;

/// Runs several reducers over `v` in a single pass. `start_values` defaults to all
/// zeros.
///
/// ```rust
/// use flex_utils::{Aggregator, aggregate};
///
/// let sum: Aggregator = |acc, x| acc + x;
/// let max: Aggregator = f64::max;
/// let out = aggregate(&[1.0, 5.0, 3.0], &[sum, max], None);
/// assert_eq!(out, vec![9.0, 5.0]);
/// ```
#[must_use]
pub fn aggregate(
    v: &[f64],
    aggregators: &[Aggregator],
    start_values: Option<&[f64]>,
) -> Vec<f64> {
    let start = match start_values {
        Some(start_values) => start_values.to_vec(),
        None => vec![0.0; aggregators.len()],
    };

    v.iter().fold(start, |acc, x| {
        aggregators
            .iter()
            .zip(acc)
            .map(|(aggregator, acc)| aggregator(acc, *x))
            .collect()
    })
}

/// `v - w`, component wise.
#[must_use]
pub fn diff(v: &[f64], w: &[f64]) -> Vec<f64> {
    v.iter().zip(w).map(|(x, y)| x - y).collect()
}

/// Distance in the `L^l` space, or `None` if the lengths differ.
#[must_use]
pub fn l_dist(l: f64, v: &[f64], w: &[f64]) -> Option<f64> {
    if v.len() != w.len() {
        return None;
    }
    let sum: f64 = v.iter().zip(w).map(|(x, y)| (x - y).abs().powf(l)).sum();
    Some(sum.powf(1.0 / l))
}

#[must_use]
pub fn l1_dist(v: &[f64], w: &[f64]) -> Option<f64> {
    if v.len() != w.len() {
        return None;
    }
    Some(v.iter().zip(w).map(|(x, y)| (x - y).abs()).sum())
}

#[must_use]
pub fn l2_dist(v: &[f64], w: &[f64]) -> Option<f64> {
    if v.len() != w.len() {
        return None;
    }
    let sum: f64 = v.iter().zip(w).map(|(x, y)| (x - y).powi(2)).sum();
    Some(sum.sqrt())
}

#[must_use]
pub fn l2_norm(v: &[f64]) -> f64 { v.iter().map(|x| x * x).sum::<f64>().sqrt() }

/// Largest value, ignoring `NaN`. [`f64::NEG_INFINITY`] for an empty slice.
#[must_use]
pub fn max(v: &[f64]) -> f64 {
    v.iter()
        .fold(f64::NEG_INFINITY, |max, x| if *x > max { *x } else { max })
}

/// Smallest value, ignoring `NaN`. [`f64::INFINITY`] for an empty slice.
#[must_use]
pub fn min(v: &[f64]) -> f64 {
    v.iter()
        .fold(f64::INFINITY, |min, x| if *x < min { *x } else { min })
}

/// Sum of the values, ignoring `NaN`.
#[must_use]
pub fn sum(v: &[f64]) -> f64 { v.iter().filter(|x| !x.is_nan()).sum() }

/// [`sum`] divided by the length, `NaN` values included in the count. `NaN` for an
/// empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(v: &[f64]) -> f64 { sum(v) / v.len() as f64 }

/// Mean of the values that are not `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_nan(v: &[f64]) -> f64 {
    let (sum, count) = v
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0_usize), |(sum, count), x| (sum + x, count + 1));
    sum / count as f64
}

/// The middle element of an already sorted slice, or `None` if it is empty.
#[must_use]
pub fn median(v: &[f64]) -> Option<f64> { v.get(v.len() / 2).copied() }

/// `v` scaled to unit length.
#[must_use]
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let norm = l2_norm(v);
    v.iter().map(|x| x / norm).collect()
}

/// Reduces the rows of `m` column wise, starting from `init`. A single row is returned
/// as is.
fn reduce_vectors<V: AsRef<[f64]>>(
    m: &[V],
    init: f64,
    step: impl Fn(f64, f64) -> f64,
) -> Vec<f64> {
    match m {
        [] => vec![],
        [only] => only.as_ref().to_vec(),
        [first, ..] => m.iter().fold(vec![init; first.as_ref().len()], |acc, v| {
            v.as_ref()
                .iter()
                .zip(acc)
                .map(|(x, acc)| step(acc, *x))
                .collect()
        }),
    }
}

#[must_use]
pub fn max_vector<V: AsRef<[f64]>>(m: &[V]) -> Vec<f64> {
    reduce_vectors(m, f64::NEG_INFINITY, |acc, x| if acc > x { acc } else { x })
}

#[must_use]
pub fn min_vector<V: AsRef<[f64]>>(m: &[V]) -> Vec<f64> {
    reduce_vectors(m, f64::INFINITY, |acc, x| if acc < x { acc } else { x })
}

#[must_use]
pub fn sum_vector<V: AsRef<[f64]>>(m: &[V]) -> Vec<f64> {
    reduce_vectors(m, 0.0, |acc, x| acc + x)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_vector<V: AsRef<[f64]>>(m: &[V]) -> Vec<f64> {
    let len = m.len() as f64;
    reduce_vectors(m, 0.0, |acc, x| acc + x / len)
}

/// Mean of each row of `m`. See [`mean_vector`] for the mean of each column.
#[must_use]
pub fn matrix_mean_row<V: AsRef<[f64]>>(m: &[V]) -> Vec<f64> {
    m.iter().map(|row| mean(row.as_ref())).collect()
}

/// `[f(0, length), f(1, length), ..]`.
pub fn range_map<T>(length: usize, f: impl Fn(usize, usize) -> T) -> Vec<T> {
    (0..length).map(|it| f(it, length)).collect()
}

/// Most values [`range`] produces. Longer ranges come back empty.
pub const MAX_RANGE_LEN: usize = 1 << 24;

/// Values from `start` (included) towards `end` (excluded), `step` apart. The sign of
/// `step` is ignored; the direction is always from `start` to `end`. Empty when `step` is
/// zero, or when the range would hold more than [`MAX_RANGE_LEN`] values.
///
/// ```rust
/// use flex_utils::range;
///
/// assert_eq!(range(0.0, 5.0, 2.0), vec![0.0, 2.0, 4.0]);
/// assert_eq!(range(3.0, 0.0, 1.0), vec![3.0, 2.0, 1.0]);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn range(start: f64, end: f64, step: f64) -> Vec<f64> {
    let span = end - start;
    let count = (span.abs() / step.abs()).ceil();
    if !count.is_finite() || count <= 0.0 || count > MAX_RANGE_LEN as f64 {
        return vec![];
    }
    let real_step = step.abs() * span.signum();
    range_map(count as usize, |it, _| start + it as f64 * real_step)
}

/// Remainder that is never negative for a positive divisor: `modulo(-1.0, 5.0) == 4.0`,
/// while `-1.0 % 5.0 == -1.0`.
#[must_use]
pub fn modulo(x: f64, y: f64) -> f64 { ((x % y) + y) % y }

/// Sorted, deduplicated union of two lists of integers.
#[must_use]
pub fn union_integers(v: &[usize], w: &[usize]) -> Vec<usize> {
    v.iter()
        .chain(w)
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
