// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` setup. The timing wrappers emit `trace!` and `debug!` events; nothing
//! is printed unless a subscriber is installed, either by the host application or with
//! [`try_initialize_logging_global`] / [`try_initialize_logging_thread_local`].

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;
#[cfg(test)]
pub mod tests_support;

// Re-export.
pub use public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
