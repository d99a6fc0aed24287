//! Core logger types and traits

pub mod appender;
#[cfg(feature = "async")]
pub mod async_logger;
pub mod color;
pub mod config;
pub mod error;
pub mod error_registry;
pub mod factory;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;

pub use appender::Appender;
#[cfg(feature = "async")]
pub use async_logger::AsyncLogger;
pub use color::{ColorContext, ColorTable, StreamId, RESET};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use error_registry::{
    error_key, DefaultErrorHandler, ErrorClassifier, ErrorHandler, ErrorRegistry,
};
pub use factory::LoggerFactory;
pub use formatter::{DefaultFormatter, LogFormatter, TimestampFormat, TimestampFormatter};
pub use log_entry::LogEntry;
pub use log_level::{LogLevel, OutputMode};
pub use logger::{Logger, LoggerBuilder};
pub use message::{Concat, LogMessage, NONE_MARKER};
pub use metrics::LoggerMetrics;
