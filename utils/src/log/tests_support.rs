// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::random_lowercase_string;

/// Path to a log file in a fresh folder under the OS temp dir.
pub fn temp_log_file_path() -> String {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("flex_utils_{}", random_lowercase_string(12)));
    dir.join("test.log").to_string_lossy().into_owned()
}
