//! Log level and output mode definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// The threshold gate compares numeric ranks. `Trace` and `Unknown` rank
/// *above* `Fatal`, so a `Trace` message passes any threshold up to `Trace`
/// and is not the most verbose level as in most frameworks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Trace = 5,
    Unknown = 6,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Trace,
        LogLevel::Unknown,
    ];

    /// Name written between the brackets of an emitted line.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Trace => "TRACE",
            LogLevel::Unknown => "UNKNOWN",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`rank`](Self::rank); out-of-range values map to `Unknown`.
    #[inline]
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            4 => LogLevel::Fatal,
            5 => LogLevel::Trace,
            _ => LogLevel::Unknown,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Cyan,
            LogLevel::Info => Yellow,
            LogLevel::Warn => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => Magenta,
            LogLevel::Trace => Green,
            LogLevel::Unknown => Blue,
        }
    }

    /// Whether the default decoration renders this level in bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, LogLevel::Info | LogLevel::Error)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "TRACE" => Ok(LogLevel::Trace),
            "UNKNOWN" => Ok(LogLevel::Unknown),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Which sink(s) receive emitted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Diagnostic stream only.
    #[default]
    Console,
    /// Log file, falling back to the diagnostic stream while no file is open.
    File,
    /// Like `File`, plus a second undecorated copy of each line in the log
    /// file. Without an open file, lines go to the diagnostic stream.
    Both,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Console => "console",
            OutputMode::File => "file",
            OutputMode::Both => "both",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputMode::Console),
            "file" => Ok(OutputMode::File),
            "both" => Ok(OutputMode::Both),
            _ => Err(format!("Invalid output mode: '{}'", s)),
        }
    }
}
