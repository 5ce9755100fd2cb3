// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Linear interpolation from `a` to `b`. The progress `p` is clamped to `[0, 1]`.
#[must_use]
pub fn interpolate_number(a: f64, b: f64, p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    a * (1.0 - p) + b * p
}

/// Component wise [`interpolate_number`]. The result is as long as the shorter input.
#[must_use]
pub fn interpolate_vector(a: &[f64], b: &[f64], p: f64) -> Vec<f64> {
    a.iter()
        .zip(b)
        .map(|(a, b)| interpolate_number(*a, *b, p))
        .collect()
}
