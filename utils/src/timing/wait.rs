// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Resolves once `duration` has elapsed on the tokio clock.
pub async fn wait(duration: Duration) { tokio::time::sleep(duration).await; }

/// Same as [`wait`]. Reads better in `timeout(ms(250)).await`.
pub async fn timeout(duration: Duration) { wait(duration).await; }

/// Shorthand for [`Duration::from_millis`].
#[must_use]
pub const fn ms(millis: u64) -> Duration { Duration::from_millis(millis) }

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_wait_elapses_at_least_duration() {
        let start = Instant::now();
        wait(ms(100)).await;
        assert!(start.elapsed() >= ms(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_wait() {
        let start = Instant::now();
        timeout(ms(250)).await;
        assert!(start.elapsed() >= ms(250));
    }
}
