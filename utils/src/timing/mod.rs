// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Debounce, throttle, and throttle-and-debounce wrappers around a callback.
//!
//! Each wrapper is a struct that owns the callback plus a little bit of shared state, and
//! defers work through a [`Scheduler`]. Pick the scheduler to fit the host:
//! - [`ManualScheduler`] for deterministic tests, or a host that drives its own loop.
//! - [`TokioScheduler`] inside a tokio runtime.
//!
//! | wrapper                   | leading call | trailing call           |
//! | ------------------------- | ------------ | ----------------------- |
//! | [`Debounced`]             | no           | always, with last args  |
//! | [`Throttled`]             | yes          | never                   |
//! | [`ThrottledAndDebounced`] | yes          | only if calls were lost |

// Attach sources.
pub mod debounce;
pub mod manual_scheduler;
pub mod scheduler;
pub mod throttle;
pub mod throttle_and_debounce;
pub mod throttle_debounce_config;
pub mod tokio_scheduler;
pub mod wait;

// Re-export.
pub use debounce::*;
pub use manual_scheduler::*;
pub use scheduler::*;
pub use throttle::*;
pub use throttle_and_debounce::*;
pub use throttle_debounce_config::*;
pub use tokio_scheduler::*;
pub use wait::*;
