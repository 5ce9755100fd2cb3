// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_checks;
pub mod color_conversions;
pub mod color_parse_error;
pub mod hex_color_parser;
pub mod rgb_value;
pub mod rgba_value;

// Re-export.
pub use color_checks::*;
pub use color_conversions::*;
pub use color_parse_error::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
pub use rgba_value::*;
