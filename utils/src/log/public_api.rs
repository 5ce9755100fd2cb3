// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;

use super::TracingConfig;
use crate::ok;

/// Installs a global subscriber, which once set can't be unset or changed. Meant for
/// applications.
///
/// Logging is **disabled** by **default**: passing [`LevelFilter::OFF`] returns right
/// away without installing anything.
///
/// ```no_run
/// use flex_utils::{DisplayPreference, TracingConfig, try_initialize_logging_global};
///
/// let config = TracingConfig::from(DisplayPreference::Stderr)
///     + TracingConfig::from(tracing_core::LevelFilter::TRACE);
/// try_initialize_logging_global(config).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Installs a subscriber for the current thread only, until the returned guard is
/// dropped. Meant for tests. Returns `None` for [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
