// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod array;
pub mod map;

// Re-export.
pub use array::*;
pub use map::*;
