//! Main logger implementation

use super::{
    appender::Appender,
    color::{ColorContext, ColorTable, StreamId},
    config::LoggerConfig,
    error::{panic_message, Result},
    error_registry::{ErrorClassifier, ErrorHandler, ErrorRegistry},
    formatter::LogFormatter,
    log_level::{LogLevel, OutputMode},
    message::LogMessage,
    metrics::LoggerMetrics,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::{Mutex, RwLock};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::error::Error;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Sink state guarded by the write lock.
struct Sinks {
    mode: OutputMode,
    console: Box<dyn Appender>,
    file: Option<Box<dyn Appender>>,
    colors: ColorTable,
}

/// Synchronous, thread-safe logger.
///
/// Every accepted call renders the message, runs it through the formatter
/// and writes its `[LEVEL] message` line to the sink picked by the output
/// mode (plus the plain copy `Both` adds to the file) while holding an
/// exclusive lock, so lines from concurrent callers never
/// interleave. Calls below the threshold return before any of that happens.
///
/// Console output goes to stderr. Logging never panics and never returns an
/// error to the caller: formatter panics fall back to the raw message, sink
/// failures are reported on stderr and counted in [`LoggerMetrics`].
///
/// ```
/// use colorlog::{Logger, LogLevel};
///
/// let logger = Logger::builder().level(LogLevel::Warn).build();
/// logger.info("dropped before formatting");
/// logger.error("written to stderr");
/// assert_eq!(logger.metrics().filtered_count(), 1);
/// ```
pub struct Logger {
    level: AtomicU8,
    formatter: RwLock<Arc<dyn LogFormatter>>,
    color_context: Arc<ColorContext>,
    sinks: Mutex<Sinks>,
    errors: RwLock<ErrorRegistry>,
    capture_stack_traces: AtomicBool,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Build a logger from a configuration snapshot.
    ///
    /// If the configured file cannot be opened the failure is reported on
    /// stderr and the logger runs without a file sink.
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Like [`new`](Self::new) but fails if the configured file cannot be opened.
    pub fn try_new(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).try_build()
    }

    fn open_file(config: &LoggerConfig) -> Result<Option<Box<dyn Appender>>> {
        match config.file_path() {
            Some(path) => Ok(Some(Box::new(FileAppender::new(path)?))),
            None => Ok(None),
        }
    }

    fn assemble(
        config: LoggerConfig,
        color_context: Arc<ColorContext>,
        console: Box<dyn Appender>,
        file: Option<Box<dyn Appender>>,
    ) -> Self {
        Self {
            level: AtomicU8::new(config.level.rank()),
            formatter: RwLock::new(config.formatter),
            color_context,
            sinks: Mutex::new(Sinks {
                mode: config.output_mode,
                console,
                file,
                colors: ColorTable::default(),
            }),
            errors: RwLock::new(ErrorRegistry::new()),
            capture_stack_traces: AtomicBool::new(true),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` passes the threshold.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.rank() >= self.level.load(Ordering::Relaxed)
    }

    /// Replace the start code used when decorating `level`.
    pub fn set_log_level_color(&self, level: LogLevel, code: impl Into<String>) {
        self.sinks.lock().colors.set(level, code);
    }

    pub fn set_output_mode(&self, mode: OutputMode) {
        self.sinks.lock().mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.sinks.lock().mode
    }

    /// Open `path` for append and make it the file sink, replacing any
    /// previously open file.
    pub fn set_log_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let appender = FileAppender::new(path)?;
        self.set_file_appender(appender);
        Ok(())
    }

    /// Install an arbitrary appender as the file sink.
    pub fn set_file_appender(&self, appender: impl Appender + 'static) {
        self.sinks.lock().file = Some(Box::new(appender));
    }

    pub fn has_file(&self) -> bool {
        self.sinks.lock().file.is_some()
    }

    pub fn set_formatter(&self, formatter: impl LogFormatter + 'static) {
        *self.formatter.write() = Arc::new(formatter);
    }

    /// Register a handler for an error category key.
    pub fn register_error_handler(
        &self,
        key: impl Into<String>,
        handler: impl ErrorHandler + 'static,
    ) {
        self.errors.write().register(key, Arc::new(handler));
    }

    /// Register a handler for errors whose static type is `E`.
    pub fn register_error_handler_for<E: Error + 'static>(
        &self,
        handler: impl ErrorHandler + 'static,
    ) {
        self.errors.write().register_for::<E>(Arc::new(handler));
    }

    pub fn set_default_error_handler(&self, handler: impl ErrorHandler + 'static) {
        self.errors.write().set_default(Arc::new(handler));
    }

    pub fn set_error_classifier(&self, classifier: impl ErrorClassifier + 'static) {
        self.errors.write().set_classifier(Arc::new(classifier));
    }

    /// Toggle the stack trace dump performed by `handle_error`.
    pub fn set_capture_stack_traces(&self, enabled: bool) {
        self.capture_stack_traces.store(enabled, Ordering::Relaxed);
    }

    pub fn color_context(&self) -> &Arc<ColorContext> {
        &self.color_context
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        sinks.console.flush()?;
        if let Some(file) = sinks.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Log `message` at `level`, attributed to `file:line`.
    ///
    /// An empty file or a zero line means "no location".
    pub fn log<M: LogMessage>(&self, level: LogLevel, file: &str, line: u32, message: M) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let text = message.render();
            self.emit(level, file, line, &text);
        }));

        if let Err(payload) = outcome {
            eprintln!(
                "[LOGGER CRITICAL] Logging call panicked: {}",
                panic_message(payload.as_ref())
            );
        }
    }

    fn emit(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        let formatted = self.format_message(level, file, line, message);
        let plain = format!("[{}] {}\n", level.to_str(), formatted);

        let mut guard = self.sinks.lock();
        let Sinks {
            mode,
            console,
            file: file_sink,
            colors,
        } = &mut *guard;

        let mode = *mode;
        let decorate_for = |stream: StreamId| {
            if self.color_context.should_color(stream) {
                Cow::Owned(format!("[{}] {}\n", colors.decorate(level), formatted))
            } else {
                Cow::Borrowed(plain.as_str())
            }
        };

        // File and Both prefer the open file; Both then adds a plain copy to it.
        let written = match (mode, file_sink.as_mut()) {
            (OutputMode::File | OutputMode::Both, Some(file_sink)) => {
                let primary = decorate_for(file_sink.stream());
                let ok = self.write_line(&mut **file_sink, &primary);
                if ok && mode == OutputMode::Both {
                    self.write_line(&mut **file_sink, &plain)
                } else {
                    ok
                }
            }
            _ => {
                let primary = decorate_for(console.stream());
                self.write_line(&mut **console, &primary)
            }
        };

        if written {
            self.metrics.record_written();
        }
    }

    fn format_message(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let formatter = Arc::clone(&*self.formatter.read());
        match panic::catch_unwind(AssertUnwindSafe(|| {
            formatter.format(level, file, line, message)
        })) {
            Ok(formatted) => formatted,
            Err(payload) => {
                self.metrics.record_format_fallback();
                eprintln!(
                    "[LOGGER ERROR] Formatter panicked: {}; writing unformatted message",
                    panic_message(payload.as_ref())
                );
                message.to_string()
            }
        }
    }

    fn write_line(&self, appender: &mut dyn Appender, line: &str) -> bool {
        match appender.append(line) {
            Ok(()) => true,
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                false
            }
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

    #[inline]
    pub fn debug_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Debug, file, line, message);
    }

    #[inline]
    pub fn info_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Info, file, line, message);
    }

    #[inline]
    pub fn warn_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Warn, file, line, message);
    }

    #[inline]
    pub fn error_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Error, file, line, message);
    }

    #[inline]
    pub fn fatal_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Fatal, file, line, message);
    }

    #[inline]
    pub fn trace_at<M: LogMessage>(&self, file: &str, line: u32, message: M) {
        self.log(LogLevel::Trace, file, line, message);
    }

    /// Log an optional value; `None` is written as `<none>`.
    pub fn log_optional<T: std::fmt::Display>(
        &self,
        level: LogLevel,
        file: &str,
        line: u32,
        value: Option<T>,
    ) {
        self.log(level, file, line, value);
    }

    /// Log an error's `Display` text.
    pub fn log_exception(&self, level: LogLevel, file: &str, line: u32, error: &dyn Error) {
        self.log(level, file, line, format_args!("{}", error));
    }

    /// Log `error` at `Error` level with `context` as its location, dump a
    /// stack trace to the console sink, then invoke exactly one handler: the
    /// one registered for the error's category, or the default handler.
    pub fn handle_error<E: Error + 'static>(&self, error: &E, context: &str) {
        let key = self.errors.read().key_for(error);
        self.dispatch_error(error, context, Some(key));
    }

    /// [`handle_error`](Self::handle_error) for type-erased errors. Only an
    /// installed classifier can route these to a registered handler.
    pub fn handle_dyn_error(&self, error: &(dyn Error + 'static), context: &str) {
        let key = self.errors.read().key_for_dyn(error);
        self.dispatch_error(error, context, key);
    }

    fn dispatch_error(&self, error: &(dyn Error + 'static), context: &str, key: Option<String>) {
        self.metrics.record_error_handled();
        self.log_exception(LogLevel::Error, context, 0, error);

        if self.capture_stack_traces.load(Ordering::Relaxed) {
            self.log_stack_trace();
        }

        let handler = self.errors.read().resolve(key.as_deref());
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(error))) {
            eprintln!(
                "[LOGGER CRITICAL] Error handler panicked: {}",
                panic_message(payload.as_ref())
            );
        }
    }

    fn log_stack_trace(&self) {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            return;
        }
        let dump = format!("Stack trace:\n{}\n", backtrace);

        // Stdout stays free of diagnostics. Best effort: a failed dump is not reported.
        let mut sinks = self.sinks.lock();
        if sinks.console.stream() == StreamId::Stdout {
            eprint!("{}", dump);
        } else {
            let _ = sinks.console.append(&dump);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let failures = self.metrics.write_failures();
        if failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use colorlog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .output_mode(OutputMode::Console)
///     .color_context(ColorContext::disabled())
///     .build();
/// logger.debug("ready");
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    color_context: Option<Arc<ColorContext>>,
    console: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            color_context: None,
            console: None,
        }
    }

    /// Replace the whole configuration snapshot
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = path.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: impl LogFormatter + 'static) -> Self {
        self.config.formatter = Arc::new(formatter);
        self
    }

    /// Use a specific color context instead of [`ColorContext::global`].
    #[must_use = "builder methods return a new value"]
    pub fn color_context(mut self, context: impl Into<Arc<ColorContext>>) -> Self {
        self.color_context = Some(context.into());
        self
    }

    /// Send console output to `writer` instead of stderr.
    #[must_use = "builder methods return a new value"]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(ConsoleAppender::with_writer(writer)));
        self
    }

    /// Use a custom appender as the console sink.
    #[must_use = "builder methods return a new value"]
    pub fn console_appender(mut self, appender: impl Appender + 'static) -> Self {
        self.console = Some(Box::new(appender));
        self
    }

    fn into_parts(self) -> (LoggerConfig, Arc<ColorContext>, Box<dyn Appender>) {
        let color_context = self.color_context.unwrap_or_else(ColorContext::global);
        let console = self
            .console
            .unwrap_or_else(|| Box::new(ConsoleAppender::stderr()));
        (self.config, color_context, console)
    }

    /// Build the Logger; an unopenable file is reported and skipped.
    pub fn build(self) -> Logger {
        let file = Logger::open_file(&self.config).unwrap_or_else(|e| {
            eprintln!("[LOGGER ERROR] {}; file output disabled", e);
            None
        });
        let (config, color_context, console) = self.into_parts();
        Logger::assemble(config, color_context, console, file)
    }

    /// Build the Logger, failing if the configured file cannot be opened.
    pub fn try_build(self) -> Result<Logger> {
        let file = Logger::open_file(&self.config)?;
        let (config, color_context, console) = self.into_parts();
        Ok(Logger::assemble(config, color_context, console, file))
    }

    /// Build an [`AsyncLogger`](super::AsyncLogger) around the configured logger.
    #[cfg(feature = "async")]
    pub fn build_async(self) -> Result<super::AsyncLogger> {
        super::AsyncLogger::from_logger(self.build())
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
