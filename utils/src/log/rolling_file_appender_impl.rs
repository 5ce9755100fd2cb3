// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Creates a non rolling file appender that writes to `path_str`. The file (and its
/// parent folder) are created right away.
///
/// # Errors
///
/// Returns an error if `path_str` has no parent folder or no file name, or if the folder
/// or the file can't be created.
pub fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of {}. It might not exist, or you might not have the required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't get a file name from {}. It must point to a file, not a folder.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
