// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("🎨 Could not parse hex color: {input:?}")]
    #[diagnostic(
        code(flex_utils::color::invalid_hex),
        help("Use `#rgb` or `#rrggbb`, the `#` is optional, eg: `#f80` or `ff8800`")
    )]
    InvalidHexColor { input: String },

    #[error("🎨 Could not find 3 color components in: {input:?}")]
    #[diagnostic(
        code(flex_utils::color::invalid_rgb_string),
        help("Use a CSS like string, eg: `rgb(255, 136, 0)` or `rgba(255, 136, 0, 0.5)`")
    )]
    InvalidRgbString { input: String },
}
