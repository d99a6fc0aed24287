//! Appender trait for log output destinations

use super::{color::StreamId, error::Result};

/// A sink receiving fully rendered lines.
///
/// `line` already carries its trailing newline; implementations write it
/// with a single call so that concurrent loggers never interleave mid-line.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Stream identity used for the color decision.
    fn stream(&self) -> StreamId {
        StreamId::Other
    }
}
