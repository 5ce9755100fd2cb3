// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go, and how much of them.
///
/// Build one from any of the types that convert into it, and merge them with `+`:
///
/// ```rust
/// use flex_utils::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config: TracingConfig = tracing_core::LevelFilter::TRACE.into();
/// let config = config + TracingConfig::from(DisplayPreference::Stderr);
///
/// assert_eq!(config.level_filter, tracing_core::LevelFilter::TRACE);
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// `String` is the path of the log file, eg: `/tmp/my_app.log` or `my_app.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two configs. The more verbose level filter wins, and the writer configs are
/// merged with `WriterConfig + WriterConfig`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two writer configs. Where both sides set the same thing, `rhs` wins (it has
/// higher specificity). Where only one side sets it, that side is kept.
/// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
/// - `Display(a) + Display(b) = Display(b)`.
/// - `DisplayAndFile(a, f) + File(g) = DisplayAndFile(a, g)`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }

            // Collision, rhs wins.
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    const OUT: DisplayPreference = DisplayPreference::Stdout;
    const ERR: DisplayPreference = DisplayPreference::Stderr;

    fn file(name: &str) -> WriterConfig { WriterConfig::File(name.to_string()) }

    fn both(display: DisplayPreference, name: &str) -> WriterConfig {
        WriterConfig::DisplayAndFile(display, name.to_string())
    }

    #[test_case(WriterConfig::None, WriterConfig::None, WriterConfig::None; "none plus none")]
    #[test_case(WriterConfig::Display(OUT), WriterConfig::None, WriterConfig::Display(OUT); "display plus none")]
    #[test_case(WriterConfig::None, file("a"), file("a"); "none plus file")]
    #[test_case(WriterConfig::Display(OUT), file("a"), both(OUT, "a"); "display plus file")]
    #[test_case(file("a"), WriterConfig::Display(ERR), both(ERR, "a"); "file plus display")]
    #[test_case(WriterConfig::Display(OUT), WriterConfig::Display(ERR), WriterConfig::Display(ERR); "display collision")]
    #[test_case(file("a"), file("b"), file("b"); "file collision")]
    #[test_case(WriterConfig::Display(OUT), both(ERR, "a"), both(ERR, "a"); "display plus both")]
    #[test_case(both(ERR, "a"), WriterConfig::Display(OUT), both(OUT, "a"); "both plus display")]
    #[test_case(both(ERR, "a"), file("b"), both(ERR, "b"); "both plus file")]
    #[test_case(both(ERR, "a"), both(OUT, "b"), both(OUT, "b"); "both collision")]
    fn test_add_writer_configs(lhs: WriterConfig, rhs: WriterConfig, expected: WriterConfig) {
        assert_eq2!(lhs + rhs, expected);
    }

    #[test]
    fn test_from_conversions() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::INFO);
        assert_eq2!(config.get_writer_config(), file(DEFAULT_LOG_FILE_NAME));

        let config: TracingConfig = ERR.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(config.get_writer_config(), WriterConfig::Display(ERR));
    }

    #[test]
    fn test_add_tracing_configs_keeps_most_verbose_level() {
        let lhs: TracingConfig = LevelFilter::TRACE.into();
        let rhs = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::WARN,
        };
        let merged = lhs + rhs;

        assert_eq2!(merged.level_filter, LevelFilter::TRACE);
        assert_eq2!(merged.writer_config, file(DEFAULT_LOG_FILE_NAME));
    }
}
