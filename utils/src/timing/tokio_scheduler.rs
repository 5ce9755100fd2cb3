// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::{runtime::Handle, task::AbortHandle};

use super::{Scheduler, Task};

/// A [`Scheduler`] that backs each timer with a tokio task which sleeps for the delay and
/// then runs the scheduled work. Canceling aborts the sleeping task.
///
/// Tasks run on the runtime's worker threads, so callbacks wrapped by the timing
/// wrappers must be `Send + Sync` (which the wrappers already require).
///
/// ```rust
/// use std::{sync::{Arc, Mutex}, time::Duration};
/// use flex_utils::{TokioScheduler, throttle};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> miette::Result<()> {
/// let scheduler = Arc::new(TokioScheduler::try_current()?);
/// let calls = Arc::new(Mutex::new(vec![]));
/// let throttled = throttle(scheduler, Duration::from_millis(50), {
///     let calls = calls.clone();
///     move |value: u32| calls.lock().unwrap().push(value)
/// });
///
/// throttled.call(1);
/// throttled.call(2);
/// assert_eq!(*calls.lock().unwrap(), vec![1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(runtime: Handle) -> Self { Self { runtime } }

    /// Uses the runtime of the current context.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NoTokioRuntime`] if called outside of a tokio runtime.
    pub fn try_current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoTokioRuntime)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        self.runtime
            .spawn(async move {
                tokio::time::sleep(delay).await;
                task();
            })
            .abort_handle()
    }

    fn cancel(&self, handle: Self::Handle) { handle.abort(); }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("⏱️ Could not find a tokio runtime to schedule timers on")]
    #[diagnostic(
        code(flex_utils::scheduler::no_tokio_runtime),
        help("Create the scheduler from inside a tokio runtime, or pass a runtime handle to `TokioScheduler::new`")
    )]
    NoTokioRuntime,
}
