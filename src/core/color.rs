//! Color decisions and per-level color codes
//!
//! Whether a line gets decorated depends on two things: an enable flag and
//! whether the target stream is a terminal. Both live in a [`ColorContext`]
//! that is handed to each logger at construction. TTY-ness is probed once
//! when the context is created and never re-probed.

use super::log_level::LogLevel;
use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// ANSI sequence restoring the default terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// Identity of the stream a line is about to be written to.
///
/// Only the two standard streams are ever considered for color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamId {
    Stdout,
    Stderr,
    /// Files, in-memory buffers and any other writer.
    Other,
}

/// Enable flag plus cached terminal detection for stdout and stderr.
#[derive(Debug)]
pub struct ColorContext {
    enabled: AtomicBool,
    stdout_tty: bool,
    stderr_tty: bool,
}

static GLOBAL_CONTEXT: OnceLock<Arc<ColorContext>> = OnceLock::new();

impl ColorContext {
    /// Probe stdout and stderr now; color enabled.
    pub fn detect() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
        }
    }

    /// Build a context with explicit terminal flags, bypassing detection.
    pub fn new(enabled: bool, stdout_tty: bool, stderr_tty: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            stdout_tty,
            stderr_tty,
        }
    }

    /// A context that never colors.
    pub fn disabled() -> Self {
        Self::new(false, false, false)
    }

    /// Shared context detected on first use and kept for the rest of the
    /// process. Loggers built without an explicit context use this one.
    pub fn global() -> Arc<ColorContext> {
        Arc::clone(GLOBAL_CONTEXT.get_or_init(|| Arc::new(ColorContext::detect())))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Cached terminal check; `Other` is never a terminal.
    pub fn is_terminal(&self, stream: StreamId) -> bool {
        match stream {
            StreamId::Stdout => self.stdout_tty,
            StreamId::Stderr => self.stderr_tty,
            StreamId::Other => false,
        }
    }

    pub fn should_color(&self, stream: StreamId) -> bool {
        self.is_enabled() && self.is_terminal(stream)
    }
}

impl Default for ColorContext {
    fn default() -> Self {
        Self::detect()
    }
}

/// Start code for each level, mutable per logger instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    codes: [String; 7],
}

impl ColorTable {
    /// The built-in code for a level, derived from its [`colored::Color`].
    pub fn default_code(level: LogLevel) -> String {
        let fg = level.color_code().to_fg_str();
        if level.is_bold() {
            format!("\x1b[1;{}m", fg)
        } else {
            format!("\x1b[{}m", fg)
        }
    }

    pub fn get(&self, level: LogLevel) -> &str {
        &self.codes[level.rank() as usize]
    }

    pub fn set(&mut self, level: LogLevel, code: impl Into<String>) {
        self.codes[level.rank() as usize] = code.into();
    }

    /// Level name wrapped in its start code and [`RESET`].
    pub fn decorate(&self, level: LogLevel) -> String {
        format!("{}{}{}", self.get(level), level.to_str(), RESET)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            codes: LogLevel::ALL.map(Self::default_code),
        }
    }
}
