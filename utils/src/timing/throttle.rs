// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::{Arc, Mutex},
          time::Duration};

use tracing::trace;

use super::{Scheduler, SharedCallback, lock_state};

/// Lets at most one call per `wait` window through, on the leading edge.
///
/// The first [`Throttled::call`] runs `callback` right away and opens a window of length
/// `wait`. Calls made while the window is open are dropped: they are not run later, and
/// their arguments are not remembered.
///
/// ```rust
/// use std::{sync::{Arc, Mutex}, time::Duration};
/// use flex_utils::{ManualScheduler, throttle};
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let calls = Arc::new(Mutex::new(vec![]));
/// let throttled = throttle(scheduler.clone(), Duration::from_millis(100), {
///     let calls = calls.clone();
///     move |value: u32| calls.lock().unwrap().push(value)
/// });
///
/// for it in 0..5 {
///     throttled.call(it);
/// }
/// scheduler.advance(Duration::from_millis(120));
/// for it in 5..10 {
///     throttled.call(it);
/// }
/// assert_eq!(*calls.lock().unwrap(), vec![0, 5]);
/// ```
pub struct Throttled<S: Scheduler, A, R = ()> {
    scheduler: Arc<S>,
    wait: Duration,
    callback: SharedCallback<A, R>,
    state: Arc<Mutex<ThrottleState>>,
}

#[derive(Debug, Default)]
struct ThrottleState {
    is_waiting: bool,
}

/// Shorthand for [`Throttled::new`].
pub fn throttle<S, A, R>(
    scheduler: Arc<S>,
    wait: Duration,
    callback: impl Fn(A) -> R + Send + Sync + 'static,
) -> Throttled<S, A, R>
where
    S: Scheduler,
    A: 'static,
    R: 'static,
{
    Throttled::new(scheduler, wait, callback)
}

impl<S, A, R> Throttled<S, A, R>
where
    S: Scheduler,
    A: 'static,
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
            state: Arc::new(Mutex::new(ThrottleState::default())),
        }
    }

    /// Runs `callback(args)` now if no window is open (and opens one), otherwise drops
    /// the call.
    pub fn call(&self, args: A) {
        {
            let mut state = lock_state(&self.state);
            if state.is_waiting {
                trace!(message = "throttle: dropped call inside open window");
                return;
            }
            state.is_waiting = true;

            // The window close timer is never canceled, not even by `reset()`.
            let task_state = Arc::clone(&self.state);
            let _unused = self.scheduler.schedule(
                self.wait,
                Box::new(move || lock_state(&task_state).is_waiting = false),
            );
        }

        trace!(message = "throttle: leading invocation");
        (self.callback)(args);
    }

    /// Closes the current window, so the next call runs right away.
    pub fn reset(&self) { lock_state(&self.state).is_waiting = false; }

    /// Runs `callback(args)` right away, without checking or opening a window.
    pub fn now(&self, args: A) -> R { (self.callback)(args) }

    /// Whether a window is open, i.e. whether [`Throttled::call`] would drop a call.
    pub fn is_waiting(&self) -> bool { lock_state(&self.state).is_waiting }

    pub fn wait(&self) -> Duration { self.wait }
}

impl<S: Scheduler, A, R> Clone for Throttled<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            wait: self.wait,
            callback: Arc::clone(&self.callback),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: Scheduler, A, R> Debug for Throttled<S, A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.wait)
            .field("is_waiting", &lock_state(&self.state).is_waiting)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualScheduler, assert_eq2};

    fn fixture(
        wait_ms: u64,
    ) -> (
        Arc<ManualScheduler>,
        Arc<Mutex<Vec<u32>>>,
        Throttled<ManualScheduler, u32>,
    ) {
        let scheduler = Arc::new(ManualScheduler::new());
        let calls = Arc::new(Mutex::new(vec![]));
        let throttled = throttle(scheduler.clone(), Duration::from_millis(wait_ms), {
            let calls = calls.clone();
            move |value: u32| calls.lock().unwrap().push(value)
        });
        (scheduler, calls, throttled)
    }

    #[test]
    fn test_leading_edge_and_drop() {
        let (scheduler, calls, throttled) = fixture(100);

        for it in 0..5 {
            throttled.call(it);
        }
        assert_eq2!(*calls.lock().unwrap(), vec![0]);
        assert!(throttled.is_waiting());

        scheduler.advance(Duration::from_millis(120));
        assert!(!throttled.is_waiting());

        for it in 5..10 {
            throttled.call(it);
        }
        assert_eq2!(*calls.lock().unwrap(), vec![0, 5]);

        // Dropped calls are not replayed later.
        scheduler.advance(Duration::from_secs(1));
        assert_eq2!(*calls.lock().unwrap(), vec![0, 5]);
    }

    #[test]
    fn test_window_closes_exactly_after_wait() {
        let (scheduler, calls, throttled) = fixture(100);

        throttled.call(0);
        scheduler.advance(Duration::from_millis(99));
        throttled.call(1);
        scheduler.advance(Duration::from_millis(1));
        throttled.call(2);

        assert_eq2!(*calls.lock().unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_reset_opens_new_window() {
        let (_scheduler, calls, throttled) = fixture(100);

        throttled.call(0);
        throttled.call(1);
        throttled.call(2);
        throttled.call(3);
        throttled.reset();
        throttled.call(4);

        assert_eq2!(*calls.lock().unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_reset_on_fresh_wrapper_is_noop() {
        let (_scheduler, calls, throttled) = fixture(100);
        throttled.reset();
        throttled.call(1);
        assert_eq2!(*calls.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_now_ignores_window() {
        let (_scheduler, calls, throttled) = fixture(100);

        throttled.call(0);
        throttled.call(1);
        throttled.call(2);
        throttled.call(3);
        throttled.now(4);

        assert_eq2!(*calls.lock().unwrap(), vec![0, 4]);
        // `now()` does not close the window either.
        assert!(throttled.is_waiting());
    }

    #[test]
    fn test_now_does_not_open_window() {
        let (_scheduler, calls, throttled) = fixture(100);

        throttled.now(0);
        assert!(!throttled.is_waiting());
        throttled.call(1);

        assert_eq2!(*calls.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_stale_close_timer_after_reset_closes_new_window() {
        let (scheduler, calls, throttled) = fixture(100);

        throttled.call(0);
        scheduler.advance(Duration::from_millis(50));
        throttled.reset();
        throttled.call(1);

        // The first window's timer fires at 100ms and closes the second window early.
        scheduler.advance(Duration::from_millis(50));
        throttled.call(2);

        assert_eq2!(*calls.lock().unwrap(), vec![0, 1, 2]);
    }
}
