// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, time::Duration};

use miette::IntoDiagnostic;
use serde::{Deserialize, Serialize};

use super::{Scheduler, ThrottledAndDebounced};

/// Timing parameters of a [`ThrottledAndDebounced`], in a shape that can be loaded from
/// a JSON settings file.
///
/// ```json
/// { "throttle_ms": 250, "debounce_ms": 500 }
/// ```
///
/// `debounce_ms` may be left out, in which case it is the same as `throttle_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleDebounceConfig {
    pub throttle_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl ThrottleDebounceConfig {
    #[must_use]
    pub fn new(throttle_ms: u64, debounce_ms: Option<u64>) -> Self {
        Self {
            throttle_ms,
            debounce_ms,
        }
    }

    #[must_use]
    pub fn throttle(&self) -> Duration { Duration::from_millis(self.throttle_ms) }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(self.throttle_ms))
    }

    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON or does not have a `throttle_ms`
    /// field.
    pub fn try_from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str(json).into_diagnostic()
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn try_to_json(&self) -> miette::Result<String> {
        serde_json::to_string(self).into_diagnostic()
    }
}

impl From<Duration> for ThrottleDebounceConfig {
    fn from(throttle: Duration) -> Self {
        Self::new(u64::try_from(throttle.as_millis()).unwrap_or(u64::MAX), None)
    }
}

/// Builds a [`ThrottledAndDebounced`] from a [`ThrottleDebounceConfig`].
pub fn throttle_and_debounce_with_config<S, A, R>(
    scheduler: Arc<S>,
    config: impl Into<ThrottleDebounceConfig>,
    callback: impl Fn(A) -> R + Send + Sync + 'static,
) -> ThrottledAndDebounced<S, A, R>
where
    S: Scheduler,
    A: Clone + Send + 'static,
    R: 'static,
{
    let config = config.into();
    ThrottledAndDebounced::new(
        scheduler,
        config.throttle(),
        Some(config.debounce()),
        callback,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{ManualScheduler, assert_eq2};

    #[test]
    fn test_debounce_defaults_to_throttle() {
        let config = ThrottleDebounceConfig::new(250, None);
        assert_eq2!(config.throttle(), Duration::from_millis(250));
        assert_eq2!(config.debounce(), Duration::from_millis(250));

        let config = ThrottleDebounceConfig::new(250, Some(40));
        assert_eq2!(config.debounce(), Duration::from_millis(40));
    }

    #[test]
    fn test_from_json() {
        let config = ThrottleDebounceConfig::try_from_json(r#"{"throttle_ms": 50}"#).unwrap();
        assert_eq2!(config, ThrottleDebounceConfig::new(50, None));

        let config =
            ThrottleDebounceConfig::try_from_json(r#"{"throttle_ms": 50, "debounce_ms": 100}"#)
                .unwrap();
        assert_eq2!(config, ThrottleDebounceConfig::new(50, Some(100)));
    }

    #[test]
    fn test_from_json_missing_throttle_fails() {
        assert!(ThrottleDebounceConfig::try_from_json(r#"{"debounce_ms": 100}"#).is_err());
        assert!(ThrottleDebounceConfig::try_from_json("not json").is_err());
    }

    #[test]
    fn test_to_json_skips_missing_debounce() {
        let json = ThrottleDebounceConfig::new(50, None).try_to_json().unwrap();
        assert_eq2!(json, r#"{"throttle_ms":50}"#);
    }

    #[test]
    fn test_with_config_builds_invoker() {
        let scheduler = Arc::new(ManualScheduler::new());
        let calls = Arc::new(Mutex::new(vec![]));
        let controlled = throttle_and_debounce_with_config(
            scheduler.clone(),
            ThrottleDebounceConfig::new(50, Some(100)),
            {
                let calls = calls.clone();
                move |value: u32| calls.lock().unwrap().push(value)
            },
        );
        assert_eq2!(controlled.throttle(), Duration::from_millis(50));
        assert_eq2!(controlled.debounce(), Duration::from_millis(100));

        for it in 0..5 {
            controlled.call(it);
        }
        scheduler.advance(Duration::from_millis(120));
        assert_eq2!(*calls.lock().unwrap(), vec![0, 4]);
    }

    #[test]
    fn test_with_duration_config() {
        let scheduler = Arc::new(ManualScheduler::new());
        let controlled =
            throttle_and_debounce_with_config(scheduler, Duration::from_millis(30), |(): ()| {});
        assert_eq2!(controlled.debounce(), Duration::from_millis(30));
    }
}
