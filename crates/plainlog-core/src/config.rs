//! Logger configuration

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::date_as_string;

/// Where and whether the logger persists entries.
///
/// Every field defaults independently: the system temp directory, a
/// timestamp-derived file name, and file logging enabled. The configuration
/// is resolved once at construction and immutable afterwards.
///
/// # Example
///
/// ```
/// use plainlog_core::LoggerConfig;
///
/// let config = LoggerConfig::new()
///     .with_folder("/var/log/myapp")
///     .with_file_name("myapp.log");
/// assert!(config.log_to_file);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory the log file lives in.
    pub log_folder: PathBuf,
    /// File name within `log_folder`.
    pub log_file_name: String,
    /// Whether entries are persisted to the file at all.
    pub log_to_file: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_folder: env::temp_dir(),
            log_file_name: format!("{}.log", date_as_string(true)),
            log_to_file: true,
        }
    }
}

impl LoggerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the directory the log file lives in.
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.log_folder = folder.into();
        self
    }

    /// Override the log file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Enable or disable file persistence.
    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    /// Resolved path of the log file.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_folder.join(&self.log_file_name)
    }
}
