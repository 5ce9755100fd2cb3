// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::{Arc, Mutex},
          time::Duration};

use tracing::{debug, trace};

use super::{PendingTimer, Scheduler, SharedCallback, lock_state};

/// Delays calls to a function by `wait`, and only lets the last call out of a burst
/// through.
///
/// Every [`Debounced::call`] cancels the invocation that an earlier call scheduled and
/// schedules a new one, `wait` from now, with its own arguments. So `callback` runs once,
/// `wait` after the last call of a burst, with the arguments of that last call.
///
/// Use a tuple for `A` if the wrapped function needs more than one argument.
///
/// ```rust
/// use std::{sync::{Arc, Mutex}, time::Duration};
/// use flex_utils::{ManualScheduler, debounce};
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let calls = Arc::new(Mutex::new(vec![]));
/// let debounced = debounce(scheduler.clone(), Duration::from_millis(100), {
///     let calls = calls.clone();
///     move |(x, y): (u32, u32)| calls.lock().unwrap().push(x + y)
/// });
///
/// for it in 0..5 {
///     debounced.call((it, 1));
/// }
/// assert!(calls.lock().unwrap().is_empty());
///
/// scheduler.advance(Duration::from_millis(120));
/// assert_eq!(*calls.lock().unwrap(), vec![5]);
/// ```
pub struct Debounced<S: Scheduler, A, R = ()> {
    scheduler: Arc<S>,
    wait: Duration,
    callback: SharedCallback<A, R>,
    state: Arc<Mutex<PendingTimer<S::Handle>>>,
}

/// Shorthand for [`Debounced::new`].
pub fn debounce<S, A, R>(
    scheduler: Arc<S>,
    wait: Duration,
    callback: impl Fn(A) -> R + Send + Sync + 'static,
) -> Debounced<S, A, R>
where
    S: Scheduler,
    A: Send + 'static,
    R: 'static,
{
    Debounced::new(scheduler, wait, callback)
}

impl<S, A, R> Debounced<S, A, R>
where
    S: Scheduler,
    A: Send + 'static,
    R: 'static,
{
    pub fn new(
        scheduler: Arc<S>,
        wait: Duration,
        callback: impl Fn(A) -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            scheduler,
            wait,
            callback: Arc::new(callback),
            state: Arc::new(Mutex::new(PendingTimer::default())),
        }
    }

    /// Replaces any pending invocation with one that runs `callback(args)` after `wait`.
    pub fn call(&self, args: A) {
        let mut state = lock_state(&self.state);

        if let Some(handle) = state.invalidate() {
            trace!(message = "debounce: superseding pending invocation");
            self.scheduler.cancel(handle);
        }

        let generation = state.next_generation();
        let task_state = Arc::clone(&self.state);
        let callback = Arc::clone(&self.callback);

        let handle = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                if !lock_state(&task_state).try_fire(generation) {
                    return;
                }
                trace!(message = "debounce: firing trailing invocation");
                callback(args);
            }),
        );
        state.set_handle(handle);
    }

    /// Discards the pending invocation, if any. Nothing runs afterwards unless
    /// [`Debounced::call`] is called again.
    pub fn cancel(&self) {
        let handle = lock_state(&self.state).invalidate();
        if let Some(handle) = handle {
            debug!(message = "debounce: canceled pending invocation");
            self.scheduler.cancel(handle);
        }
    }

    /// Runs `callback(args)` right away. Any pending invocation is left alone, so both
    /// may run.
    pub fn now(&self, args: A) -> R { (self.callback)(args) }

    /// Whether an invocation is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool { lock_state(&self.state).is_pending() }

    pub fn wait(&self) -> Duration { self.wait }
}

impl<S: Scheduler, A, R> Clone for Debounced<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            wait: self.wait,
            callback: Arc::clone(&self.callback),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: Scheduler, A, R> Debug for Debounced<S, A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("is_pending", &lock_state(&self.state).is_pending())
            .finish_non_exhaustive()
    }
}
