//! Message formatters
//!
//! A formatter turns `(level, file, line, message)` into the text that
//! follows the `[LEVEL] ` prefix of an emitted line. Formatters are pure and
//! must not panic; the logger still isolates them and falls back to the raw
//! message if one does.

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capability for rendering the body of a log line.
///
/// Closures with the matching signature implement it:
///
/// ```
/// use colorlog::core::{LogFormatter, LogLevel};
///
/// let upper = |_: LogLevel, _: &str, _: u32, msg: &str| msg.to_uppercase();
/// assert_eq!(upper.format(LogLevel::Info, "", 0, "hi"), "HI");
/// ```
pub trait LogFormatter: Send + Sync {
    fn format(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String;
}

impl<F> LogFormatter for F
where
    F: Fn(LogLevel, &str, u32, &str) -> String + Send + Sync,
{
    fn format(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        self(level, file, line, message)
    }
}

/// Prefixes `file:line ` when the location is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl LogFormatter for DefaultFormatter {
    fn format(&self, _level: LogLevel, file: &str, line: u32, message: &str) -> String {
        if !file.is_empty() && line > 0 {
            format!("{}:{} {}", file, line, message)
        } else {
            message.to_string()
        }
    }
}

/// Timestamp renderings for [`TimestampFormatter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,
    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,
    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,
    /// Seconds since the epoch
    Unix,
    /// Milliseconds since the epoch
    UnixMillis,
    /// Any strftime format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Wraps another formatter and prepends the current UTC time.
///
/// ```
/// use colorlog::core::{DefaultFormatter, LogFormatter, LogLevel, TimestampFormat, TimestampFormatter};
///
/// let fmt = TimestampFormatter::new(DefaultFormatter, TimestampFormat::Unix);
/// let out = fmt.format(LogLevel::Info, "main.rs", 3, "ready");
/// assert!(out.ends_with(" main.rs:3 ready"));
/// ```
#[derive(Debug, Clone)]
pub struct TimestampFormatter<F> {
    inner: F,
    timestamp_format: TimestampFormat,
}

impl<F: LogFormatter> TimestampFormatter<F> {
    pub fn new(inner: F, timestamp_format: TimestampFormat) -> Self {
        Self {
            inner,
            timestamp_format,
        }
    }

    /// Same as [`LogFormatter::format`] with a caller-supplied clock.
    pub fn format_at(
        &self,
        now: &DateTime<Utc>,
        level: LogLevel,
        file: &str,
        line: u32,
        message: &str,
    ) -> String {
        format!(
            "{} {}",
            self.timestamp_format.format(now),
            self.inner.format(level, file, line, message)
        )
    }
}

impl<F: LogFormatter> LogFormatter for TimestampFormatter<F> {
    fn format(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        self.format_at(&Utc::now(), level, file, line, message)
    }
}
