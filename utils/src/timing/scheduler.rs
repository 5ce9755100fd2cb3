// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::{Arc, Mutex, MutexGuard, PoisonError},
          time::Duration};

/// A unit of deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// The wrapped function of a [`crate::Debounced`], [`crate::Throttled`], or
/// [`crate::ThrottledAndDebounced`]. It is shared with every task that the wrapper
/// schedules, so that a deferred invocation can still reach it after the call that armed
/// it has returned.
pub type SharedCallback<A, R> = Arc<dyn Fn(A) -> R + Send + Sync + 'static>;

/// The only capability the timing wrappers need from their host: "run this task once,
/// after at least `delay` has elapsed, and let me cancel it before it runs".
///
/// Timer granularity and drift are up to the implementation. Two implementations ship
/// with this crate:
/// 1. [`crate::ManualScheduler`] is a deterministic fake clock that only moves when it is
///    told to. Use it in tests, or in a single threaded host that owns its event loop.
/// 2. [`crate::TokioScheduler`] spawns a tokio task per timer.
pub trait Scheduler: Send + Sync + 'static {
    /// Token returned by [`Scheduler::schedule`] that identifies the scheduled task.
    type Handle: Send + 'static;

    /// Registers `task` to run once after `delay`. Must not run `task` synchronously.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Removes a scheduled task so that it never runs. Canceling a task that has already
    /// run, or that was already canceled, is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Locks the state of a timing wrapper. A panicking callback never runs while this lock
/// is held, so a poisoned lock still guards consistent state and is recovered.
pub(crate) fn lock_state<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Bookkeeping for the single trailing invocation that a [`crate::Debounced`] or a
/// [`crate::ThrottledAndDebounced`] may have in flight.
///
/// Every time a trailing invocation is armed (or canceled) the `generation` moves on. A
/// task remembers the generation it was armed with and does nothing if that generation
/// is stale by the time it runs. This keeps the "only the most recently armed task
/// fires" guarantee even when the scheduler runs tasks on another thread and a cancel
/// races with a task that is already running.
#[derive(Debug)]
pub(crate) struct PendingTimer<H> {
    handle: Option<H>,
    generation: u64,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self {
            handle: None,
            generation: 0,
        }
    }
}

impl<H> PendingTimer<H> {
    pub fn is_pending(&self) -> bool { self.handle.is_some() }

    /// Invalidates the current generation and hands back the handle (if any) so the
    /// caller can cancel it with its scheduler.
    pub fn invalidate(&mut self) -> Option<H> {
        self.generation = self.generation.wrapping_add(1);
        self.handle.take()
    }

    /// Returns the generation that the next armed task must carry.
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn set_handle(&mut self, handle: H) { self.handle = Some(handle); }

    /// Called by a task when it runs. Returns `false` if the task was superseded or
    /// canceled, in which case it must not invoke the callback.
    pub fn try_fire(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.handle = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_timer_starts_idle() {
        let timer = PendingTimer::<u8>::default();
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_pending_timer_stale_generation_does_not_fire() {
        let mut timer = PendingTimer::<u8>::default();

        let first = timer.next_generation();
        timer.set_handle(1);
        let second = timer.next_generation();
        timer.set_handle(2);

        assert!(!timer.try_fire(first));
        assert!(timer.is_pending());
        assert!(timer.try_fire(second));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_pending_timer_invalidate_returns_handle() {
        let mut timer = PendingTimer::<u8>::default();
        let generation = timer.next_generation();
        timer.set_handle(7);

        assert_eq!(timer.invalidate(), Some(7));
        assert_eq!(timer.invalidate(), None);
        assert!(!timer.try_fire(generation));
    }
}
