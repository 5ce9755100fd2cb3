// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Decimal places that [`is_close`] is usually called with.
pub const DEFAULT_CLOSE_PRECISION: i32 = 6;

/// Restricts `value` to `[min, max]`. Unlike [`f64::clamp`] this does not panic when
/// `min > max`; `min` wins in that case.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[must_use]
pub fn identity<T>(it: T) -> T { it }

/// Whether `a` and `b` differ by less than `10^-precision`.
#[must_use]
pub fn is_close(a: f64, b: f64, precision: i32) -> bool {
    (a - b).abs() < 10_f64.powi(-precision)
}
