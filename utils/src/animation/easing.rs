// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Easing functions. Each takes a time `t` in `[0, 1]`, where `0` is the start and `1`
//! is the end, and returns the eased time. Every function maps `0` to `0` and `1` to `1`.

use strum_macros::{Display, EnumIter, EnumString};

#[must_use]
pub fn linear(t: f64) -> f64 { t }

#[must_use]
pub fn quad_in(t: f64) -> f64 { t * t }

#[must_use]
pub fn quad_out(t: f64) -> f64 { t * (2.0 - t) }

#[must_use]
pub fn quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[must_use]
pub fn cubic_in(t: f64) -> f64 { t * t * t }

#[must_use]
pub fn cubic_out(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

#[must_use]
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[must_use]
pub fn quart_in(t: f64) -> f64 { t.powi(4) }

#[must_use]
pub fn quart_out(t: f64) -> f64 { 1.0 - (t - 1.0).powi(4) }

#[must_use]
pub fn quart_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - 8.0 * (t - 1.0).powi(4)
    }
}

#[must_use]
pub fn quint_in(t: f64) -> f64 { t.powi(5) }

#[must_use]
pub fn quint_out(t: f64) -> f64 { 1.0 + (t - 1.0).powi(5) }

#[must_use]
pub fn quint_in_out(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 + 16.0 * (t - 1.0).powi(5)
    }
}

/// All the easing functions, by name. The names parse case insensitively, and both the
/// snake case (`quad_in_out`) and camel case (`quadInOut`) spellings are accepted.
///
/// ```rust
/// use std::str::FromStr;
/// use flex_utils::Easing;
///
/// let easing = Easing::from_str("cubicInOut").unwrap();
/// assert_eq!(easing, Easing::CubicInOut);
/// assert_eq!(easing.to_string(), "cubic_in_out");
/// assert_eq!(easing.apply(0.5), 0.5);
/// ```
#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Easing {
    Linear,
    #[strum(to_string = "quad_in", serialize = "quadIn")]
    QuadIn,
    #[strum(to_string = "quad_out", serialize = "quadOut")]
    QuadOut,
    #[strum(to_string = "quad_in_out", serialize = "quadInOut")]
    QuadInOut,
    #[strum(to_string = "cubic_in", serialize = "cubicIn")]
    CubicIn,
    #[strum(to_string = "cubic_out", serialize = "cubicOut")]
    CubicOut,
    #[strum(to_string = "cubic_in_out", serialize = "cubicInOut")]
    CubicInOut,
    #[strum(to_string = "quart_in", serialize = "quartIn")]
    QuartIn,
    #[strum(to_string = "quart_out", serialize = "quartOut")]
    QuartOut,
    #[strum(to_string = "quart_in_out", serialize = "quartInOut")]
    QuartInOut,
    #[strum(to_string = "quint_in", serialize = "quintIn")]
    QuintIn,
    #[strum(to_string = "quint_out", serialize = "quintOut")]
    QuintOut,
    #[strum(to_string = "quint_in_out", serialize = "quintInOut")]
    QuintInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 { (self.as_fn())(t) }

    #[must_use]
    pub fn as_fn(self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::QuadIn => quad_in,
            Easing::QuadOut => quad_out,
            Easing::QuadInOut => quad_in_out,
            Easing::CubicIn => cubic_in,
            Easing::CubicOut => cubic_out,
            Easing::CubicInOut => cubic_in_out,
            Easing::QuartIn => quart_in,
            Easing::QuartOut => quart_out,
            Easing::QuartInOut => quart_in_out,
            Easing::QuintIn => quint_in,
            Easing::QuintOut => quint_out,
            Easing::QuintInOut => quint_in_out,
        }
    }
}
