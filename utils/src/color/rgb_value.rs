// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use crate::{ColorParseError, parse_hex_color};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// The low 24 bits of `value` are `0xRRGGBB`, the rest is ignored.
impl From<u32> for RgbValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u32) -> Self {
        Self {
            red: (value >> 16) as u8,
            green: (value >> 8) as u8,
            blue: value as u8,
        }
    }
}

impl From<RgbValue> for u32 {
    fn from(value: RgbValue) -> Self { value.to_dec() }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidHexColor`] unless `input` is `#rrggbb` or
    /// `#rgb`, with or without the `#`.
    pub fn try_from_hex_color(input: &str) -> Result<Self, ColorParseError> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(ColorParseError::InvalidHexColor {
                input: input.to_string(),
            }),
        }
    }

    /// Packs the channels into `0xRRGGBB`.
    #[must_use]
    pub fn to_dec(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_array(&self) -> [u8; 3] { [self.red, self.green, self.blue] }
}
