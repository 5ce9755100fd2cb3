// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::{Arc, Mutex},
          time::Duration};

use tracing::{debug, trace};

use super::{PendingTimer, Scheduler, SharedCallback, lock_state};

/// Throttles calls on the leading edge, and makes sure the latest call is not lost.
///
/// - The first call of a window runs `callback` right away and opens a window of length
///   `throttle`, just like [`crate::Throttled`].
/// - Calls made while the window is open are suppressed. If any were, `callback` runs
///   once more with the arguments of the last call, `debounce` after that last call, just
///   like [`crate::Debounced`].
///
/// ```text
/// throttle = 3, debounce = 3
///
/// t | call        | effect
/// --+-------------+--------------------------------
/// 1 | call(args1) | callback(args1)
/// 2 | call(args2) | suppressed
/// 3 | call(args3) | suppressed
/// 4 | call(args4) | callback(args4), window reopened
/// 5 | call(args5) | suppressed
/// 6 |             |
/// 7 |             |
/// 8 |             | callback(args5), trailing
/// ```
///
/// Every call re-arms the trailing timer, including the one that opens a window. The
/// timer only invokes `callback` if at least one call was suppressed since the last
/// leading invocation, so a lone call never runs twice.
///
/// ```rust
/// use std::{sync::{Arc, Mutex}, time::Duration};
/// use flex_utils::{ManualScheduler, throttle_and_debounce};
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let calls = Arc::new(Mutex::new(vec![]));
/// let controlled = throttle_and_debounce(
///     scheduler.clone(),
///     Duration::from_millis(100),
///     None,
///     {
///         let calls = calls.clone();
///         move |value: u32| calls.lock().unwrap().push(value)
///     },
/// );
///
/// for it in 0..5 {
///     controlled.call(it);
/// }
/// assert_eq!(*calls.lock().unwrap(), vec![0]);
///
/// scheduler.advance(Duration::from_millis(120));
/// assert_eq!(*calls.lock().unwrap(), vec![0, 4]);
/// ```
pub struct ThrottledAndDebounced<S: Scheduler, A, R = ()> {
    scheduler: Arc<S>,
    throttle: Duration,
    debounce: Duration,
    callback: SharedCallback<A, R>,
    state: Arc<Mutex<ThrottleAndDebounceState<S::Handle>>>,
}

#[derive(Debug)]
struct ThrottleAndDebounceState<H> {
    is_waiting: bool,
    suppressed_calls: usize,
    trailing: PendingTimer<H>,
}

impl<H> Default for ThrottleAndDebounceState<H> {
    fn default() -> Self {
        Self {
            is_waiting: false,
            suppressed_calls: 0,
            trailing: PendingTimer::default(),
        }
    }
}

/// Shorthand for [`ThrottledAndDebounced::new`]. When `debounce` is `None` it is the same
/// as `throttle`.
pub fn throttle_and_debounce<S, A, R>(
    scheduler: Arc<S>,
    throttle: Duration,
    debounce: Option<Duration>,
    callback: impl Fn(A) -> R + Send + Sync + 'static,
) -> ThrottledAndDebounced<S, A, R>
where
    S: Scheduler,
    A: Clone + Send + 'static,
    R: 'static,
{
    ThrottledAndDebounced::new(scheduler, throttle, debounce, callback)
}

impl<S, A, R> ThrottledAndDebounced<S, A, R>
where
    S: Scheduler,
    A: Clone + Send + 'static,
    R: 'static,
{
    pub fn new(
        scheduler: Arc<S>,
        throttle: Duration,
        debounce: Option<Duration>,
        callback: impl Fn(A) -> R + Send + Sync + 'static,
    ) -> Self {
        Self {
            scheduler,
            throttle,
            debounce: debounce.unwrap_or(throttle),
            callback: Arc::new(callback),
            state: Arc::new(Mutex::new(ThrottleAndDebounceState::default())),
        }
    }

    /// Re-arms the trailing invocation with `args`, then either runs `callback(args)`
    /// right away (no window open) or counts the call as suppressed.
    pub fn call(&self, args: A) {
        {
            let mut state = lock_state(&self.state);
            self.arm_trailing(&mut state, args.clone());

            if state.is_waiting {
                state.suppressed_calls += 1;
                trace!(
                    message = "throttle_and_debounce: suppressed call",
                    suppressed_calls = state.suppressed_calls
                );
                return;
            }

            state.suppressed_calls = 0;
            state.is_waiting = true;

            // The window close timer is never canceled, not even by `reset()`.
            let task_state = Arc::clone(&self.state);
            let _unused = self.scheduler.schedule(
                self.throttle,
                Box::new(move || lock_state(&task_state).is_waiting = false),
            );
        }

        trace!(message = "throttle_and_debounce: leading invocation");
        (self.callback)(args);
    }

    fn arm_trailing(&self, state: &mut ThrottleAndDebounceState<S::Handle>, args: A) {
        if let Some(handle) = state.trailing.invalidate() {
            self.scheduler.cancel(handle);
        }

        let generation = state.trailing.next_generation();
        let task_state = Arc::clone(&self.state);
        let callback = Arc::clone(&self.callback);

        let handle = self.scheduler.schedule(
            self.debounce,
            Box::new(move || {
                {
                    let mut state = lock_state(&task_state);
                    if !state.trailing.try_fire(generation) || state.suppressed_calls == 0
                    {
                        return;
                    }
                    state.suppressed_calls = 0;
                }
                trace!(message = "throttle_and_debounce: trailing invocation");
                callback(args);
            }),
        );
        state.trailing.set_handle(handle);
    }

    /// Closes the current window. The trailing invocation, if any, is left alone.
    pub fn reset(&self) { lock_state(&self.state).is_waiting = false; }

    /// Discards the trailing invocation, if any. The current window is left alone.
    pub fn cancel(&self) {
        let handle = lock_state(&self.state).trailing.invalidate();
        if let Some(handle) = handle {
            debug!(message = "throttle_and_debounce: canceled trailing invocation");
            self.scheduler.cancel(handle);
        }
    }

    /// Runs `callback(args)` right away, ignoring and not touching any state.
    pub fn now(&self, args: A) -> R { (self.callback)(args) }

    /// Whether a window is open.
    pub fn is_waiting(&self) -> bool { lock_state(&self.state).is_waiting }

    /// Whether a trailing timer is armed. It only invokes `callback` when it fires if
    /// [`ThrottledAndDebounced::suppressed_calls`] is non zero at that point.
    pub fn is_pending(&self) -> bool { lock_state(&self.state).trailing.is_pending() }

    /// Calls suppressed since the last leading (or trailing) invocation.
    pub fn suppressed_calls(&self) -> usize { lock_state(&self.state).suppressed_calls }

    pub fn throttle(&self) -> Duration { self.throttle }

    pub fn debounce(&self) -> Duration { self.debounce }
}

impl<S: Scheduler, A, R> Clone for ThrottledAndDebounced<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            throttle: self.throttle,
            debounce: self.debounce,
            callback: Arc::clone(&self.callback),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: Scheduler, A, R> Debug for ThrottledAndDebounced<S, A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = lock_state(&self.state);
        f.debug_struct("ThrottledAndDebounced")
            .field("throttle", &self.throttle)
            .field("debounce", &self.debounce)
            .field("is_waiting", &state.is_waiting)
            .field("suppressed_calls", &state.suppressed_calls)
            .field("is_pending", &state.trailing.is_pending())
            .finish_non_exhaustive()
    }
}
