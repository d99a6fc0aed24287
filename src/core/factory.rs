//! Convenience constructors wiring a [`LoggerConfig`] into a logger

use super::config::LoggerConfig;
use super::logger::Logger;

#[cfg(feature = "async")]
use super::{async_logger::AsyncLogger, error::Result};

/// ```
/// use colorlog::{LoggerConfig, LoggerFactory, LogLevel};
///
/// let logger = LoggerFactory::create_logger(LoggerConfig::default().with_level(LogLevel::Debug));
/// assert_eq!(logger.log_level(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerFactory;

impl LoggerFactory {
    pub fn create_logger(config: LoggerConfig) -> Logger {
        Logger::new(config)
    }

    #[cfg(feature = "async")]
    pub fn create_async_logger(config: LoggerConfig) -> Result<AsyncLogger> {
        AsyncLogger::new(config)
    }
}
