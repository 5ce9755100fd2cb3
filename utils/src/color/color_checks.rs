// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Predicates that tell which color encoding a value uses. [`crate::to_rgba`] relies on
//! them to pick a conversion.

use crate::{parse_color_function, parse_hex_color};

/// `#rrggbb` or `#rgb`. Unlike [`crate::hex_to_rgb`], the `#` is required.
#[must_use]
pub fn is_hex(input: &str) -> bool { input.starts_with('#') && parse_hex_color(input).is_ok() }

/// In `0..=1`.
#[must_use]
pub fn is_norm_float(value: f64) -> bool { (0.0..=1.0).contains(&value) }

/// Every value is in `0..=1`. True for an empty slice.
#[must_use]
pub fn is_norm_float_array(values: &[f64]) -> bool { values.iter().copied().all(is_norm_float) }

/// A whole number in `0..=255`.
#[must_use]
pub fn is_uint8(value: f64) -> bool { value.fract() == 0.0 && (0.0..=255.0).contains(&value) }

/// Every value is a whole number in `0..=255`. True for an empty slice.
#[must_use]
pub fn is_uint8_array(values: &[f64]) -> bool { values.iter().copied().all(is_uint8) }

/// 3 channels, all normalized or all [`is_uint8`].
#[must_use]
pub fn is_rgb_array(values: &[f64]) -> bool {
    values.len() == 3 && (is_norm_float_array(values) || is_uint8_array(values))
}

/// 4 channels, all normalized or all [`is_uint8`], or 3 [`is_uint8`] channels followed by
/// a normalized alpha.
#[must_use]
pub fn is_rgba_array(values: &[f64]) -> bool {
    match values {
        [red, green, blue, alpha] => {
            is_norm_float_array(values)
                || is_uint8_array(values)
                || (is_uint8_array(&[*red, *green, *blue]) && is_norm_float(*alpha))
        }
        _ => false,
    }
}

/// Contains an `rgb(r, g, b)` call, eg: `color: rgb(255, 136, 0);`. Case is ignored.
#[must_use]
pub fn is_rgb_str(input: &str) -> bool { contains_color_function(input, "rgb", 3) }

/// Contains an `rgba(r, g, b, a)` call. Case is ignored.
#[must_use]
pub fn is_rgba_str(input: &str) -> bool { contains_color_function(input, "rgba", 4) }

fn contains_color_function(input: &str, name: &str, arity: usize) -> bool {
    input.char_indices().any(|(index, _)| {
        parse_color_function(&input[index..], name)
            .is_ok_and(|(_, args)| args.len() == arity)
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("#ff8800", true)]
    #[test_case("#F80", true)]
    #[test_case("ff8800", false; "missing hash")]
    #[test_case("#ff88", false)]
    #[test_case("#ff8800aa", false)]
    #[test_case("#ggg", false)]
    fn test_is_hex(input: &str, expected: bool) {
        assert_eq2!(is_hex(input), expected);
    }

    #[test_case(0.0, true, true)]
    #[test_case(1.0, true, true)]
    #[test_case(0.5, true, false)]
    #[test_case(255.0, false, true)]
    #[test_case(256.0, false, false)]
    #[test_case(-1.0, false, false)]
    #[test_case(f64::NAN, false, false)]
    fn test_scalar_checks(value: f64, norm_float: bool, uint8: bool) {
        assert_eq2!(is_norm_float(value), norm_float);
        assert_eq2!(is_uint8(value), uint8);
    }

    #[test_case(&[0.0, 0.5, 1.0], true, false)]
    #[test_case(&[0.0, 128.0, 255.0], false, true)]
    #[test_case(&[0.0, 1.0], true, true)]
    #[test_case(&[], true, true)]
    fn test_array_checks(values: &[f64], norm_float: bool, uint8: bool) {
        assert_eq2!(is_norm_float_array(values), norm_float);
        assert_eq2!(is_uint8_array(values), uint8);
    }

    #[test_case(&[255.0, 136.0, 0.0], true, false)]
    #[test_case(&[1.0, 0.5, 0.0], true, false)]
    #[test_case(&[255.0, 0.5, 0.0], false, false; "mixed ranges")]
    #[test_case(&[255.0, 136.0], false, false; "too short")]
    #[test_case(&[255.0, 136.0, 0.0, 255.0], false, true)]
    #[test_case(&[0.1, 0.2, 0.3, 0.4], false, true)]
    #[test_case(&[255.0, 136.0, 0.0, 0.5], false, true; "normalized alpha")]
    #[test_case(&[0.5, 136.0, 0.0, 0.5], false, false; "normalized red")]
    #[test_case(&[1.0, 2.0, 3.0, 4.0, 5.0], false, false; "too long")]
    fn test_rgb_and_rgba_arrays(values: &[f64], rgb: bool, rgba: bool) {
        assert_eq2!(is_rgb_array(values), rgb);
        assert_eq2!(is_rgba_array(values), rgba);
    }

    #[test_case("rgb(255, 136, 0)", true, false)]
    #[test_case("color: RGB( 1,2 , 3 );", true, false; "embedded and spaced")]
    #[test_case("rgba(255, 136, 0, 0.5)", false, true)]
    #[test_case("rgb(255, 136)", false, false)]
    #[test_case("rgba(255, 136, 0)", false, false)]
    #[test_case("rgb(255, 136, 0, 1)", false, false)]
    #[test_case("#ff8800", false, false)]
    fn test_rgb_and_rgba_strings(input: &str, rgb: bool, rgba: bool) {
        assert_eq2!(is_rgb_str(input), rgb);
        assert_eq2!(is_rgba_str(input), rgba);
    }
}
