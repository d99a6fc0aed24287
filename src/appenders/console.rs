//! Console appender implementation

use crate::core::{Appender, Result, StreamId};
use std::fmt;
use std::io::Write;

/// Writes lines to a standard stream or any other writer.
///
/// The logger's console output goes to stderr so that a program's stdout
/// stays free of log noise.
pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    stream: StreamId,
}

impl ConsoleAppender {
    /// Appender on the process stderr.
    pub fn new() -> Self {
        Self::stderr()
    }

    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            stream: StreamId::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
            stream: StreamId::Stdout,
        }
    }

    /// Appender on an arbitrary writer. Such writers are never colored.
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            stream: StreamId::Other,
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAppender")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn stream(&self) -> StreamId {
        self.stream
    }
}
