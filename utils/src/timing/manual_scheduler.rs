// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deterministic [`Scheduler`] driven by an explicit fake clock.

use std::{collections::BTreeMap,
          fmt::{Debug, Formatter},
          sync::Mutex,
          time::Duration};

use super::{Scheduler, Task, lock_state};

/// A [`Scheduler`] whose clock only moves when [`ManualScheduler::advance`] (or
/// [`ManualScheduler::run_until_idle`]) is called. Nothing runs in the background.
///
/// Tasks run in deadline order. Tasks that share a deadline run in the order they were
/// scheduled. While a task runs, [`ManualScheduler::now`] reports that task's deadline,
/// so a task that schedules another task gets the same timeline as it would on a real
/// clock.
///
/// ```rust
/// use std::{sync::{Arc, Mutex}, time::Duration};
/// use flex_utils::{ManualScheduler, debounce};
///
/// let scheduler = Arc::new(ManualScheduler::new());
/// let calls = Arc::new(Mutex::new(vec![]));
/// let debounced = debounce(scheduler.clone(), Duration::from_millis(100), {
///     let calls = calls.clone();
///     move |value: u32| calls.lock().unwrap().push(value)
/// });
///
/// debounced.call(1);
/// debounced.call(2);
/// scheduler.advance(Duration::from_millis(120));
/// assert_eq!(*calls.lock().unwrap(), vec![2]);
/// ```
pub struct ManualScheduler {
    clock: Mutex<ManualClock>,
}

/// Identifies a task scheduled on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimerHandle {
    deadline: Duration,
    id: u64,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<ManualTimerHandle, Task>,
}

impl Default for ManualScheduler {
    fn default() -> Self { Self::new() }
}

impl Debug for ManualScheduler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let clock = lock_state(&self.clock);
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Mutex::new(ManualClock::default()),
        }
    }

    /// Fake time elapsed since this scheduler was created.
    pub fn now(&self) -> Duration { lock_state(&self.clock).now }

    /// Number of tasks that are scheduled and have not run yet.
    pub fn pending_count(&self) -> usize { lock_state(&self.clock).queue.len() }

    /// Moves the clock forward by `by`, running every task whose deadline falls within
    /// the span, including tasks scheduled by those tasks. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut ran = 0;

        while let Some(task) = self.pop_due(Some(target)) {
            task();
            ran += 1;
        }

        let mut clock = lock_state(&self.clock);
        if clock.now < target {
            clock.now = target;
        }

        ran
    }

    /// Runs every scheduled task, moving the clock to each task's deadline in turn,
    /// until the queue is empty. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.pop_due(None) {
            task();
            ran += 1;
        }
        ran
    }

    /// Removes the earliest task (due by `limit`, if given) and moves the clock to its
    /// deadline. The lock is released before the task is run by the caller.
    fn pop_due(&self, limit: Option<Duration>) -> Option<Task> {
        let mut clock = lock_state(&self.clock);
        let (&handle, _) = clock.queue.first_key_value()?;
        if limit.is_some_and(|limit| handle.deadline > limit) {
            return None;
        }
        let task = clock.queue.remove(&handle)?;
        if clock.now < handle.deadline {
            clock.now = handle.deadline;
        }
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimerHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let mut clock = lock_state(&self.clock);
        let handle = ManualTimerHandle {
            deadline: clock.now + delay,
            id: clock.next_id,
        };
        clock.next_id += 1;
        clock.queue.insert(handle, task);
        handle
    }

    fn cancel(&self, handle: Self::Handle) {
        lock_state(&self.clock).queue.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::assert_eq2;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Arc::new(Mutex::new(vec![]));
        let make = {
            let log = log.clone();
            move |label: &'static str| -> Task {
                let log = log.clone();
                Box::new(move || log.lock().unwrap().push(label))
            }
        };
        (log, make)
    }

    #[test]
    fn test_nothing_runs_until_advanced() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule(Duration::from_millis(10), make("a"));

        assert_eq2!(scheduler.pending_count(), 1);
        assert!(log.lock().unwrap().is_empty());

        assert_eq2!(scheduler.advance(Duration::from_millis(9)), 0);
        assert!(log.lock().unwrap().is_empty());

        assert_eq2!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq2!(*log.lock().unwrap(), vec!["a"]);
        assert_eq2!(scheduler.now(), Duration::from_millis(10));
    }

    #[test]
    fn test_tasks_run_in_deadline_then_fifo_order() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule(Duration::from_millis(30), make("late"));
        scheduler.schedule(Duration::from_millis(10), make("first"));
        scheduler.schedule(Duration::from_millis(10), make("second"));

        assert_eq2!(scheduler.advance(Duration::from_millis(50)), 3);
        assert_eq2!(*log.lock().unwrap(), vec!["first", "second", "late"]);
        assert_eq2!(scheduler.now(), Duration::from_millis(50));
    }

    #[test]
    fn test_cancel_removes_task_and_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        let handle = scheduler.schedule(Duration::from_millis(10), make("a"));
        scheduler.cancel(handle);
        scheduler.cancel(handle);

        assert_eq2!(scheduler.pending_count(), 0);
        assert_eq2!(scheduler.advance(Duration::from_millis(20)), 0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_task_scheduled_by_task_uses_task_deadline_as_now() {
        let scheduler = Arc::new(ManualScheduler::new());
        let log = Arc::new(Mutex::new(vec![]));

        let inner_scheduler = scheduler.clone();
        let inner_log = log.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                let now = inner_scheduler.now();
                inner_log.lock().unwrap().push(now);
                let nested_log = inner_log.clone();
                let nested_scheduler = inner_scheduler.clone();
                inner_scheduler.schedule(
                    Duration::from_millis(5),
                    Box::new(move || {
                        nested_log.lock().unwrap().push(nested_scheduler.now());
                    }),
                );
            }),
        );

        assert_eq2!(scheduler.advance(Duration::from_millis(20)), 2);
        assert_eq2!(
            *log.lock().unwrap(),
            vec![Duration::from_millis(10), Duration::from_millis(15)]
        );
    }

    #[test]
    fn test_run_until_idle() {
        let scheduler = ManualScheduler::new();
        let (log, make) = recorder();

        scheduler.schedule(Duration::from_secs(60), make("b"));
        scheduler.schedule(Duration::ZERO, make("a"));

        assert_eq2!(scheduler.run_until_idle(), 2);
        assert_eq2!(*log.lock().unwrap(), vec!["a", "b"]);
        assert_eq2!(scheduler.now(), Duration::from_secs(60));
    }
}
