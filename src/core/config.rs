//! Logger configuration snapshot

use super::error::Result;
use super::formatter::{DefaultFormatter, LogFormatter};
use super::log_level::{LogLevel, OutputMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn default_formatter() -> Arc<dyn LogFormatter> {
    Arc::new(DefaultFormatter)
}

/// Construction input for [`Logger`](super::Logger) and
/// [`AsyncLogger`](super::AsyncLogger).
///
/// The logger copies these values at construction; later changes go
/// through the logger's setters.
///
/// ```
/// use colorlog::{LoggerConfig, LogLevel, OutputMode};
///
/// let config = LoggerConfig::from_json(r#"{"level": "warning", "output_mode": "both"}"#).unwrap();
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.output_mode, OutputMode::Both);
/// assert!(config.file_path().is_none());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Initial threshold
    #[serde(deserialize_with = "deserialize_level")]
    pub level: LogLevel,
    pub output_mode: OutputMode,
    /// Empty disables the file sink
    pub file_path: PathBuf,
    #[serde(skip, default = "default_formatter")]
    pub formatter: Arc<dyn LogFormatter>,
}

/// Accepts any spelling `LogLevel::from_str` understands, e.g. `"warning"`.
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: impl LogFormatter + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// The configured file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        if self.file_path.as_os_str().is_empty() {
            None
        } else {
            Some(&self.file_path)
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            output_mode: OutputMode::Console,
            file_path: PathBuf::new(),
            formatter: default_formatter(),
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("level", &self.level)
            .field("output_mode", &self.output_mode)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
