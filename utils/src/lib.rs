// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # flex_utils
//!
//! Rate limiting wrappers for callbacks, plus a grab bag of small helpers that UI and
//! data visualization code keeps reaching for.
//!
//! ## Timing
//!
//! [`debounce`], [`throttle`], and [`throttle_and_debounce`] wrap a callback so that a
//! burst of calls turns into fewer invocations. Timers are created through a
//! [`Scheduler`], so the same wrapper runs on a tokio runtime ([`TokioScheduler`]) or on
//! a deterministic virtual clock ([`ManualScheduler`]).
//!
//! ```rust
//! use std::{sync::{Arc, Mutex}, time::Duration};
//! use flex_utils::{ManualScheduler, throttle_and_debounce};
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let seen = Arc::new(Mutex::new(vec![]));
//! let on_scroll = throttle_and_debounce(scheduler.clone(), Duration::from_millis(50), None, {
//!     let seen = seen.clone();
//!     move |offset: u32| seen.lock().unwrap().push(offset)
//! });
//!
//! for offset in 0..5 {
//!     on_scroll.call(offset);
//! }
//! scheduler.advance(Duration::from_millis(100));
//!
//! // The first call runs right away, the last one runs once things settle down.
//! assert_eq!(*seen.lock().unwrap(), vec![0, 4]);
//! ```
//!
//! ## Helpers
//!
//! - [`animation`]: easing functions and interpolation.
//! - [`color`]: hex, decimal, and `rgb(..)` string conversions.
//! - [`format`]: picks a number format specifier for an axis domain.
//! - [`math`]: vectors, distances, point in polygon tests, and argsort.
//! - [`collections`], [`conversion`], [`string`]: small odds and ends.
//!
//! ## Logging
//!
//! The timing wrappers emit `tracing` events at `trace` and `debug` level. See [`log`]
//! to install a subscriber that prints them or writes them to a file.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod animation;
pub mod collections;
pub mod color;
pub mod conversion;
pub mod decl_macros;
pub mod format;
pub mod log;
pub mod math;
pub mod string;
pub mod timing;

// Re-export.
pub use animation::*;
pub use collections::*;
pub use color::*;
pub use conversion::*;
pub use format::*;
pub use log::*;
pub use math::*;
pub use string::*;
pub use timing::*;
