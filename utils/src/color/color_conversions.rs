// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::warn;

use crate::{ColorParseError, RgbValue, RgbaValue, is_norm_float_array, is_rgb_array,
            is_rgba_array, parse_numbers};

/// `0xRRGGBB` to its channels. Bits above the low 24 are ignored.
#[must_use]
pub fn dec_to_rgb(dec: u32) -> RgbValue { RgbValue::from(dec) }

/// `#rrggbb` or `#rgb` (the `#` is optional) to `0xRRGGBB`.
///
/// # Errors
///
/// See [`hex_to_rgb`].
pub fn hex_to_dec(hex: &str) -> Result<u32, ColorParseError> {
    hex_to_rgb(hex).map(|it| it.to_dec())
}

/// # Errors
///
/// Returns [`ColorParseError::InvalidHexColor`] unless `hex` is `#rrggbb` or `#rgb`,
/// with or without the `#`.
pub fn hex_to_rgb(hex: &str) -> Result<RgbValue, ColorParseError> {
    RgbValue::try_from_hex_color(hex)
}

/// Like [`hex_to_rgb`], plus an opaque alpha. When `normalize` is set every channel is
/// in `0..=1`, otherwise in `0..=255`.
///
/// # Errors
///
/// See [`hex_to_rgb`].
pub fn hex_to_rgba(hex: &str, normalize: bool) -> Result<RgbaValue, ColorParseError> {
    hex_to_rgb(hex).map(|it| RgbaValue::from_rgb(it, normalize))
}

/// Pulls the first 3 or 4 numbers out of a CSS like `rgb(..)` or `rgba(..)` string.
/// Anything past the 4th number is ignored.
///
/// # Errors
///
/// Returns [`ColorParseError::InvalidRgbString`] if there are fewer than 3 numbers.
pub fn rgb_str_to_rgb_array(rgb_str: &str) -> Result<Vec<f64>, ColorParseError> {
    let error = || ColorParseError::InvalidRgbString {
        input: rgb_str.to_string(),
    };
    let (_, mut numbers) = parse_numbers(rgb_str).map_err(|_| error())?;
    if numbers.len() < 3 {
        return Err(error());
    }
    numbers.truncate(4);
    Ok(numbers)
}

/// The rgb channels of a CSS like `rgb(..)` string packed into `0xRRGGBB`. Alpha is
/// ignored, channels are clamped to `0..=255`.
///
/// # Errors
///
/// See [`rgb_str_to_rgb_array`].
pub fn rgb_str_to_dec(rgb_str: &str) -> Result<u32, ColorParseError> {
    let numbers = rgb_str_to_rgb_array(rgb_str)?;
    let [red, green, blue] = [numbers[0], numbers[1], numbers[2]].map(channel_to_u8);
    Ok(RgbValue::from_u8(red, green, blue).to_dec())
}

/// Lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    RgbValue::from_u8(red, green, blue).to_hex()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(value: f64) -> u8 { value.round().clamp(0.0, 255.0) as u8 }

/// Anything [`to_rgba`] knows how to turn into a color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ColorInput<'a> {
    /// `#rrggbb` or `#rgb`.
    Hex(&'a str),
    /// `0xRRGGBB`.
    Dec(u32),
    /// 3 (rgb) or 4 (rgba) channels, all in `0..=255`, or all in `0..=1`.
    Components(&'a [f64]),
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self { ColorInput::Hex(value) }
}

impl From<u32> for ColorInput<'_> {
    fn from(value: u32) -> Self { ColorInput::Dec(value) }
}

impl<'a> From<&'a [f64]> for ColorInput<'a> {
    fn from(value: &'a [f64]) -> Self { ColorInput::Components(value) }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ColorInput<'a> {
    fn from(value: &'a [f64; N]) -> Self { ColorInput::Components(value) }
}

/// Converts `input` to RGBA. When `normalize` is set every channel is in `0..=1`,
/// otherwise in `0..=255`. An unsupported input turns into opaque white, with a warning.
pub fn to_rgba<'a>(input: impl Into<ColorInput<'a>>, normalize: bool) -> RgbaValue {
    let input = input.into();
    let maybe_rgba = match input {
        ColorInput::Components(components) => components_to_rgba(components, normalize),
        ColorInput::Hex(hex) => hex_to_rgba(hex, normalize).ok(),
        ColorInput::Dec(dec) if dec <= 0x00ff_ffff => {
            Some(RgbaValue::from_rgb(dec_to_rgb(dec), normalize))
        }
        ColorInput::Dec(_) => None,
    };

    maybe_rgba.unwrap_or_else(|| {
        warn!(
            message = "Only hex, decimal, rgb, and rgba colors are supported, using white",
            input = ?input
        );
        RgbaValue::white(normalize)
    })
}

fn components_to_rgba(components: &[f64], normalize: bool) -> Option<RgbaValue> {
    let all_normalized = is_norm_float_array(components);
    match *components {
        [red, green, blue] if is_rgb_array(components) => {
            let rgba = RgbaValue::new(red, green, blue, if all_normalized { 1.0 } else { 255.0 });
            Some(convert_rgba(rgba, all_normalized, normalize))
        }
        [red, green, blue, alpha] if is_rgba_array(components) => {
            let alpha = if all_normalized || alpha <= 1.0 {
                alpha
            } else {
                alpha / 255.0
            };
            // Alpha is normalized from here on, the rgb channels are in `0..=255` unless
            // all of them were normalized to begin with.
            let rgba = if all_normalized {
                RgbaValue::new(red, green, blue, alpha)
            } else {
                RgbaValue::new(red / 255.0, green / 255.0, blue / 255.0, alpha)
            };
            Some(if normalize {
                rgba
            } else {
                RgbaValue::from(rgba.to_array().map(|it| it * 255.0))
            })
        }
        _ => None,
    }
}

/// Rescales an opaque rgb color between the `0..=1` and `0..=255` ranges.
fn convert_rgba(rgba: RgbaValue, was_normalized: bool, normalize: bool) -> RgbaValue {
    match (was_normalized, normalize) {
        (true, false) => RgbaValue::from(rgba.to_array().map(|it| it * 255.0)),
        (false, true) => RgbaValue::from(rgba.to_array().map(|it| it / 255.0)),
        _ => rgba,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_dec_to_rgb() {
        assert_eq2!(dec_to_rgb(0xff8800), RgbValue::from_u8(255, 136, 0));
        assert_eq2!(dec_to_rgb(0), RgbValue::from_u8(0, 0, 0));
    }

    #[test_case("#ff8800", 0xff8800)]
    #[test_case("#f80", 0xff8800; "short form is expanded")]
    #[test_case("000001", 1)]
    fn test_hex_to_dec(hex: &str, expected: u32) {
        assert_eq2!(hex_to_dec(hex).unwrap(), expected);
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq2!(
            hex_to_rgba("#ff0000", false).unwrap(),
            RgbaValue::new(255.0, 0.0, 0.0, 255.0)
        );
        assert_eq2!(
            hex_to_rgba("#ff0000", true).unwrap(),
            RgbaValue::new(1.0, 0.0, 0.0, 1.0)
        );
        assert!(hex_to_rgba("red", false).is_err());
    }

    #[test]
    fn test_rgb_str_to_rgb_array() {
        assert_eq2!(
            rgb_str_to_rgb_array("rgb(255, 136, 0)").unwrap(),
            vec![255.0, 136.0, 0.0]
        );
        assert_eq2!(
            rgb_str_to_rgb_array("rgba(255, 136, 0, 0.5)").unwrap(),
            vec![255.0, 136.0, 0.0, 0.5]
        );
        assert_eq2!(
            rgb_str_to_rgb_array("1 2 3 4 5").unwrap(),
            vec![1.0, 2.0, 3.0, 4.0]
        );
        assert_eq2!(
            rgb_str_to_rgb_array("rgb(1, 2)").unwrap_err(),
            ColorParseError::InvalidRgbString {
                input: "rgb(1, 2)".to_string()
            }
        );
        assert!(rgb_str_to_rgb_array("none").is_err());
    }

    #[test]
    fn test_rgb_str_to_dec() {
        assert_eq2!(rgb_str_to_dec("rgb(255, 136, 0)").unwrap(), 0xff8800);
        assert_eq2!(rgb_str_to_dec("rgba(0, 0, 1, 0.5)").unwrap(), 1);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq2!(rgb_to_hex(255, 136, 0), "#ff8800");
        assert_eq2!(rgb_to_hex(0, 10, 255), "#000aff");
    }

    #[test]
    fn test_to_rgba_from_hex_and_dec() {
        assert_eq2!(to_rgba("#ff8800", false), RgbaValue::new(255.0, 136.0, 0.0, 255.0));
        assert_eq2!(to_rgba(0xff0000_u32, true), RgbaValue::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_to_rgba_from_components() {
        assert_eq2!(
            to_rgba(&[255.0, 0.0, 0.0], false),
            RgbaValue::new(255.0, 0.0, 0.0, 255.0)
        );
        assert_eq2!(
            to_rgba(&[255.0, 0.0, 0.0], true),
            RgbaValue::new(1.0, 0.0, 0.0, 1.0)
        );
        assert_eq2!(
            to_rgba(&[0.5, 0.25, 0.0, 0.5], true),
            RgbaValue::new(0.5, 0.25, 0.0, 0.5)
        );
        assert_eq2!(
            to_rgba(&[255.0, 0.0, 0.0, 0.5], true),
            RgbaValue::new(1.0, 0.0, 0.0, 0.5)
        );
        assert_eq2!(
            to_rgba(&[255.0, 0.0, 0.0, 0.5], false),
            RgbaValue::new(255.0, 0.0, 0.0, 127.5)
        );
        assert_eq2!(
            to_rgba(&[0.0, 0.0, 255.0, 255.0], false),
            RgbaValue::new(0.0, 0.0, 255.0, 255.0)
        );
    }

    #[test_case(ColorInput::Hex("red"); "unknown name")]
    #[test_case(ColorInput::Dec(0x0100_0000); "too large")]
    #[test_case(ColorInput::Components(&[1.0, 2.0]); "too short")]
    #[test_case(ColorInput::Components(&[300.0, 0.0, 0.0]); "out of range")]
    #[test_case(ColorInput::Components(&[0.5, 128.0, 0.0]); "mixed ranges")]
    fn test_to_rgba_falls_back_to_white(input: ColorInput<'_>) {
        assert_eq2!(to_rgba(input, false), RgbaValue::white(false));
        assert_eq2!(to_rgba(input, true), RgbaValue::white(true));
    }

    #[test_case(&[255.0, 136.0, 0.0, 0.5])]
    #[test_case(&[0.5, 136.0, 0.0, 0.5])]
    #[test_case(&[1.0, 2.0, 3.0, 4.0, 5.0])]
    #[test_case(&[0.1, 0.2, 0.3])]
    fn test_to_rgba_accepts_what_the_checks_accept(components: &[f64]) {
        let is_supported = is_rgb_array(components) || is_rgba_array(components);
        let is_white = to_rgba(components, true) == RgbaValue::white(true);
        assert_eq2!(is_supported, !is_white);
    }
}
