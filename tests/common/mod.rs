//! Helpers shared by the integration test binaries

#![allow(dead_code)]

use colorlog::prelude::*;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// In-memory writer whose contents stay readable after it is moved into a logger.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("log output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Appender that pretends to be a terminal stderr, so colors apply.
pub struct TerminalBuffer(pub SharedBuffer);

impl Appender for TerminalBuffer {
    fn append(&mut self, line: &str) -> Result<()> {
        self.0.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "terminal-buffer"
    }

    fn stream(&self) -> StreamId {
        StreamId::Stderr
    }
}

/// Appender standing in for stdout.
pub struct StdoutBuffer(pub SharedBuffer);

impl Appender for StdoutBuffer {
    fn append(&mut self, line: &str) -> Result<()> {
        self.0.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout-buffer"
    }

    fn stream(&self) -> StreamId {
        StreamId::Stdout
    }
}

/// Writer that fails every call.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Uncolored logger writing its console output into a buffer.
pub fn capturing_builder(level: LogLevel) -> (LoggerBuilder, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let builder = Logger::builder()
        .level(level)
        .color_context(ColorContext::disabled())
        .console_writer(buffer.clone());
    (builder, buffer)
}
