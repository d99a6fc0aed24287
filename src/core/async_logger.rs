//! Asynchronous logger
//!
//! Callers render their message and push it onto an unbounded queue; a
//! single worker thread drains the queue into a private [`Logger`]. The
//! caller never waits for sink I/O.
//!
//! The worker must be stopped with [`AsyncLogger::shutdown`] (or by dropping
//! the logger, which calls it) before the logger is considered disposed.
//! Everything enqueued before shutdown starts is written; anything enqueued
//! after is silently discarded. There is no backpressure.

use super::{
    config::LoggerConfig,
    error::{panic_message, LoggerError, Result},
    formatter::LogFormatter,
    log_entry::LogEntry,
    log_level::{LogLevel, OutputMode},
    logger::Logger,
    message::LogMessage,
    metrics::LoggerMetrics,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

const WORKER_THREAD_NAME: &str = "colorlog-async";

/// # Example
///
/// ```
/// use colorlog::{AsyncLogger, LoggerConfig, LogLevel};
///
/// let logger = AsyncLogger::new(LoggerConfig::default()).unwrap();
/// logger.log(LogLevel::Info, file!(), line!(), "queued");
/// assert!(logger.shutdown());
/// ```
pub struct AsyncLogger {
    logger: Arc<Logger>,
    sender: Mutex<Option<Sender<LogEntry>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl AsyncLogger {
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::from_logger(Logger::new(config))
    }

    /// Start a worker draining into `logger`.
    pub fn from_logger(logger: Logger) -> Result<Self> {
        let logger = Arc::new(logger);
        let (sender, receiver) = unbounded();
        let worker_logger = Arc::clone(&logger);

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || Self::run(worker_logger, receiver))
            .map_err(LoggerError::WorkerSpawn)?;

        Ok(Self {
            logger,
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Worker loop: `recv` keeps yielding queued entries after the sender is
    /// dropped and only ends once the queue is empty.
    fn run(logger: Arc<Logger>, receiver: Receiver<LogEntry>) {
        for entry in receiver.iter() {
            logger.log(entry.level, &entry.file, entry.line, entry.message.as_str());
        }

        if let Err(e) = logger.flush() {
            eprintln!("[LOGGER ERROR] Async worker failed to flush: {}", e);
        }
    }

    /// Enqueue a message. Returns immediately; below-threshold messages are
    /// not queued at all.
    pub fn log<M: LogMessage>(&self, level: LogLevel, file: &str, line: u32, message: M) {
        if !self.logger.is_enabled(level) {
            self.logger.metrics().record_filtered();
            return;
        }

        let text = match panic::catch_unwind(AssertUnwindSafe(|| message.render())) {
            Ok(text) => text,
            Err(payload) => {
                eprintln!(
                    "[LOGGER CRITICAL] Rendering a queued message panicked: {}",
                    panic_message(payload.as_ref())
                );
                return;
            }
        };

        let entry = LogEntry::new(level, text).with_location(file, line);
        if let Some(sender) = self.sender.lock().as_ref() {
            // The receiver lives until the worker exits, which only happens
            // after the sender is gone.
            let _ = sender.send(entry);
        }
    }

    #[inline]
    pub fn debug<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Debug, "", 0, message);
    }

    #[inline]
    pub fn info<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Info, "", 0, message);
    }

    #[inline]
    pub fn warn<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Warn, "", 0, message);
    }

    #[inline]
    pub fn error<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Error, "", 0, message);
    }

    #[inline]
    pub fn fatal<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Fatal, "", 0, message);
    }

    #[inline]
    pub fn trace<M: LogMessage>(&self, message: M) {
        self.log(LogLevel::Trace, "", 0, message);
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.logger.set_log_level(level);
    }

    pub fn log_level(&self) -> LogLevel {
        self.logger.log_level()
    }

    pub fn set_output_mode(&self, mode: OutputMode) {
        self.logger.set_output_mode(mode);
    }

    pub fn set_log_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        self.logger.set_log_file(path)
    }

    pub fn set_formatter(&self, formatter: impl LogFormatter + 'static) {
        self.logger.set_formatter(formatter);
    }

    pub fn set_log_level_color(&self, level: LogLevel, code: impl Into<String>) {
        self.logger.set_log_level_color(level, code);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.logger.metrics()
    }

    /// Entries queued but not yet taken by the worker.
    pub fn pending(&self) -> usize {
        self.sender.lock().as_ref().map_or(0, |sender| sender.len())
    }

    pub fn is_running(&self) -> bool {
        self.sender.lock().is_some()
    }

    /// Stop accepting entries, let the worker drain the queue, and join it.
    ///
    /// Returns `false` if the worker panicked. Calling it again is a no-op
    /// returning `true`.
    pub fn shutdown(&self) -> bool {
        drop(self.sender.lock().take());

        let handle = self.worker.lock().take();
        match handle {
            Some(handle) => match handle.join() {
                Ok(()) => true,
                Err(payload) => {
                    eprintln!(
                        "[LOGGER ERROR] Async worker thread panicked during shutdown: {}",
                        panic_message(payload.as_ref())
                    );
                    false
                }
            },
            None => true,
        }
    }
}

impl Drop for AsyncLogger {
    fn drop(&mut self) {
        self.shutdown();
    }
}
