// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbValue;

/// An RGBA color with `f64` channels, either in the `0..=255` range (alpha is `255` when
/// opaque) or normalized to `0..=1` (alpha is `1` when opaque).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RgbaValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaValue {
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque white, normalized or not.
    #[must_use]
    pub fn white(normalize: bool) -> Self {
        if normalize {
            Self::new(1.0, 1.0, 1.0, 1.0)
        } else {
            Self::new(255.0, 255.0, 255.0, 255.0)
        }
    }

    /// Opaque `rgb`, normalized or not.
    #[must_use]
    pub fn from_rgb(rgb: RgbValue, normalize: bool) -> Self {
        let [red, green, blue] = rgb.to_array().map(f64::from);
        if normalize {
            Self::new(red / 255.0, green / 255.0, blue / 255.0, 1.0)
        } else {
            Self::new(red, green, blue, 255.0)
        }
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 4] { [self.red, self.green, self.blue, self.alpha] }
}

impl From<[f64; 4]> for RgbaValue {
    fn from([red, green, blue, alpha]: [f64; 4]) -> Self { Self::new(red, green, blue, alpha) }
}
