// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use flex_utils::{ManualScheduler, TracingConfig, WriterConfig, debounce, ms,
                 random_lowercase_string, throttle, try_initialize_logging_thread_local};
use tracing_core::LevelFilter;

fn temp_log_file_path() -> String {
    std::env::temp_dir()
        .join(format!("flex_utils_it_{}", random_lowercase_string(12)))
        .join("timing.log")
        .to_string_lossy()
        .into_owned()
}

#[test]
fn timing_events_reach_log_file_at_trace_level() {
    let file_path = temp_log_file_path();
    let config = TracingConfig {
        writer_config: WriterConfig::File(file_path.clone()),
        level_filter: LevelFilter::TRACE,
    };
    let guard = try_initialize_logging_thread_local(config).unwrap();
    assert!(guard.is_some());

    let scheduler = Arc::new(ManualScheduler::new());
    let throttled = throttle(scheduler.clone(), ms(100), |_: u32| {});
    throttled.call(1);
    throttled.call(2);

    let debounced = debounce(scheduler.clone(), ms(100), |_: u32| {});
    debounced.call(1);
    debounced.cancel();
    scheduler.run_until_idle();
    drop(guard);

    let output = std::fs::read_to_string(&file_path).unwrap();
    assert!(output.contains("throttle: leading invocation"));
    assert!(output.contains("throttle: dropped call inside open window"));
    assert!(output.contains("debounce: canceled pending invocation"));
}

#[test]
fn timing_trace_events_are_filtered_at_debug_level() {
    let file_path = temp_log_file_path();
    let config = TracingConfig {
        writer_config: WriterConfig::File(file_path.clone()),
        level_filter: LevelFilter::DEBUG,
    };
    let guard = try_initialize_logging_thread_local(config).unwrap();

    let scheduler = Arc::new(ManualScheduler::new());
    let debounced = debounce(scheduler.clone(), ms(100), |_: u32| {});
    debounced.call(1);
    debounced.cancel();
    drop(guard);

    let output = std::fs::read_to_string(&file_path).unwrap();
    assert!(output.contains("debounce: canceled pending invocation"));
    assert!(!output.contains("superseding"));
    assert!(!output.contains("firing"));
}

#[test]
fn logging_off_installs_nothing() {
    let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
    assert!(guard.is_none());
}
