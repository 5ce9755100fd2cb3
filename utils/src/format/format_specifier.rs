// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// A [d3-format](https://d3js.org/d3-format) specifier that fits the precision of some
/// data. [`Display`] renders the specifier string, eg: `,.3~r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatSpecifier {
    /// Fixed point notation, eg: `.5~f`.
    Fixed { decimals: u32 },
    /// Decimal notation with thousands separators, rounded to significant digits, eg:
    /// `,.4~r`.
    Grouped { significant_digits: u32 },
    /// Decimal notation with an SI prefix, rounded to significant digits, eg: `.3~s`.
    SiPrefixed { significant_digits: u32 },
}

impl Default for FormatSpecifier {
    fn default() -> Self {
        Self::Grouped {
            significant_digits: 3,
        }
    }
}

impl Display for FormatSpecifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Fixed { decimals } => write!(f, ".{decimals}~f"),
            Self::Grouped { significant_digits } => write!(f, ",.{significant_digits}~r"),
            Self::SiPrefixed { significant_digits } => write!(f, ".{significant_digits}~s"),
        }
    }
}

/// Picks a format specifier for values in `[domain_min, domain_max]`, based on the order
/// of magnitude of the extent and of the domain max.
///
/// | extent / max                     | result                           |
/// | -------------------------------- | -------------------------------- |
/// | extent <= 0, or not a number     | `,.3~r` ([`Default`])            |
/// | extent <= 1                      | `.N~f`, enough decimals for it   |
/// | more than 4 digits               | `.3~s`                           |
/// | otherwise                        | `,.N~r`, N = digits, at least 3  |
///
/// ```rust
/// use flex_utils::select_format_specifier;
///
/// assert_eq!(select_format_specifier(0.0, 1.0).to_string(), ".3~f");
/// assert_eq!(select_format_specifier(4000.95, 5000.05).to_string(), ",.4~r");
/// assert_eq!(select_format_specifier(0.0, 500_000_000.0).to_string(), ".3~s");
/// ```
#[must_use]
pub fn select_format_specifier(domain_min: f64, domain_max: f64) -> FormatSpecifier {
    let extent = domain_max - domain_min;
    // Also catches a NaN extent, further down.
    if extent <= 0.0 {
        return FormatSpecifier::default();
    }

    let log = extent.log10();
    let Some(num_digits) = digit_count(log) else {
        return FormatSpecifier::default();
    };

    // Zero or negative log (extent <= 1) means the interesting digits are decimals.
    if log <= 0.0 {
        return FormatSpecifier::Fixed {
            decimals: to_u32(num_digits + 1.0).max(3),
        };
    }

    let log_max = extent.max(domain_max.abs()).log10();
    let Some(num_digits_max) = digit_count(log_max) else {
        return FormatSpecifier::default();
    };

    if num_digits_max > 4.0 {
        return FormatSpecifier::SiPrefixed {
            significant_digits: 3,
        };
    }

    FormatSpecifier::Grouped {
        significant_digits: to_u32(num_digits).max(to_u32(num_digits_max)).max(3),
    }
}

/// Same as [`select_format_specifier`], for a domain given as a slice of `[min, max]`.
/// Fewer than two entries yields the default.
#[must_use]
pub fn select_format_specifier_for_domain(domain: &[f64]) -> FormatSpecifier {
    match domain {
        [min, max, ..] => select_format_specifier(*min, *max),
        _ => FormatSpecifier::default(),
    }
}

/// Digits needed to show a number whose base 10 log is `log`. Exact powers of ten need
/// one more digit (`100` has 3 digits, `log10(100)` is 2).
fn digit_count(log: f64) -> Option<f64> {
    let is_integer = log.is_finite() && log.fract() == 0.0;
    let it = (log.abs() + if is_integer { 1.0 } else { 0.0 }).round();
    if it.is_nan() { None } else { Some(it) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u32(value: f64) -> u32 { value.clamp(0.0, f64::from(u32::MAX)) as u32 }
