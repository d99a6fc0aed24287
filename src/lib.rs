//! # colorlog
//!
//! A small logging core with level filtering, color-coded level names and
//! optional asynchronous emission.
//!
//! ## Features
//!
//! - **Level gate**: calls below the threshold return before any formatting or I/O
//! - **Colors**: level names are decorated only when the target stream is a terminal
//! - **Sinks**: stderr, an append-mode file, or both
//! - **Async**: an unbounded queue drained by one worker thread
//! - **Error dispatch**: `handle_error` routes errors to per-category handlers
//!
//! ```
//! use colorlog::prelude::*;
//! use colorlog::info;
//!
//! let logger = Logger::builder().level(LogLevel::Debug).build();
//! info!(logger, "listening on port {}", 8080);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    #[cfg(feature = "async")]
    pub use crate::core::AsyncLogger;
    pub use crate::core::{
        Appender, ColorContext, Concat, DefaultFormatter, ErrorHandler, LogFormatter, LogLevel,
        LogMessage, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, OutputMode,
        Result, StreamId, TimestampFormat, TimestampFormatter,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
#[cfg(feature = "async")]
pub use crate::core::AsyncLogger;
pub use crate::core::{
    Appender, ColorContext, ColorTable, Concat, DefaultErrorHandler, DefaultFormatter,
    ErrorClassifier, ErrorHandler, ErrorRegistry, LogEntry, LogFormatter, LogLevel, LogMessage,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerFactory, LoggerMetrics, OutputMode,
    Result, StreamId, TimestampFormat, TimestampFormatter,
};
