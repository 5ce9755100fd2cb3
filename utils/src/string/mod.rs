// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod casing;
pub mod string_ops;

// Re-export.
pub use casing::*;
pub use string_ops::*;
