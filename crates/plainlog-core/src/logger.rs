//! Console logger with optional file persistence
//!
//! Every entry goes to stdout; with file logging enabled it is also appended
//! to a single log file through a handle held for the logger's lifetime, so
//! appends from concurrent threads cannot clobber each other.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::config::LoggerConfig;
use crate::format::{render_entry, SEPARATOR};
use crate::level::LogLevel;
use crate::message::LogMessage;
use crate::traits::{Log, LogError, LogResult};

/// Leveled logger mirroring every entry to stdout, optionally persisting it.
///
/// # Example
///
/// ```no_run
/// use plainlog_core::{Logger, LoggerConfig, LogExt};
///
/// let logger = Logger::with_config(LoggerConfig::new().with_file_name("app.log"))?;
/// logger.info("starting up", None)?;
/// logger.warn("disk low", Some("storage"))?;
/// # Ok::<(), plainlog_core::LogError>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    file: Option<Mutex<File>>,
}

impl Logger {
    /// Create a logger with the default configuration.
    pub fn new() -> LogResult<Self> {
        Self::with_config(LoggerConfig::default())
    }

    /// Create a logger with an explicit configuration.
    ///
    /// With file logging enabled this announces the resolved path on stdout,
    /// creates (truncating) the target file and writes the opening separator
    /// line. The handle stays open until the logger is dropped.
    pub fn with_config(config: LoggerConfig) -> LogResult<Self> {
        let file = if config.log_to_file {
            let path = config.log_file_path();
            println!("Logging to {}", path.display());

            let mut file = File::create(&path).map_err(|source| LogError::Create {
                path: path.clone(),
                source,
            })?;
            writeln!(file, "{SEPARATOR}")
                .map_err(|source| LogError::Create { path, source })?;
            Some(Mutex::new(file))
        } else {
            None
        };

        Ok(Self { config, file })
    }

    /// The configuration this logger was built with.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Resolved log file path, `None` when file logging is disabled.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.config
            .log_to_file
            .then(|| self.config.log_file_path())
    }
}

impl Log for Logger {
    fn log(&self, level: LogLevel, message: LogMessage, label: Option<&str>) -> LogResult<()> {
        let text = render_entry(level.tag(), &message.render(), label);

        // Console first, unconditionally; a failed append never takes it back.
        print!("{text}");

        if let Some(file) = &self.file {
            let mut file = file.lock();
            file.write_all(text.as_bytes())
                .map_err(|source| LogError::Append {
                    path: self.config.log_file_path(),
                    source,
                })?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("file_logging", &self.file.is_some())
            .finish()
    }
}
