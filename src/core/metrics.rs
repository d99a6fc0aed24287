//! Logger metrics for observability
//!
//! Counters describing what happened to each logging call: written,
//! filtered by the level gate, rescued by the formatter fallback, or lost to
//! a failing sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use colorlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls that produced a line on their primary sink
    lines_written: AtomicU64,

    /// Calls dropped by the level gate
    filtered_count: AtomicU64,

    /// Calls whose formatter panicked and were written unformatted
    format_fallbacks: AtomicU64,

    /// Calls abandoned because a sink write failed
    write_failures: AtomicU64,

    /// `handle_error` invocations
    errors_handled: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
            format_fallbacks: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            errors_handled: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_fallbacks(&self) -> u64 {
        self.format_fallbacks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn errors_handled(&self) -> u64 {
        self.errors_handled.load(Ordering::Relaxed)
    }

    /// Record a written line; returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_fallback(&self) -> u64 {
        self.format_fallbacks.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_error_handled(&self) -> u64 {
        self.errors_handled.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of accepted calls lost to sink failures, as a percentage.
    ///
    /// Returns 0.0 if nothing has been accepted yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
