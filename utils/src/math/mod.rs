// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod geometry;
pub mod math_ops;
pub mod sorting;
pub mod vector;

// Re-export.
pub use geometry::*;
pub use math_ops::*;
pub use sorting::*;
pub use vector::*;
