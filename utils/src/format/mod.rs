// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod format_specifier;

// Re-export.
pub use format_specifier::*;
