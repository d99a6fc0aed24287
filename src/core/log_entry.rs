//! Log entry carried through the async queue

use super::log_level::LogLevel;

/// A rendered message waiting for the async worker.
///
/// The queue owns each entry from enqueue until the worker consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            file: String::new(),
            line: 0,
            message: message.into(),
        }
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = file.to_string();
        self.line = line;
        self
    }

    pub fn has_location(&self) -> bool {
        !self.file.is_empty() && self.line > 0
    }
}
