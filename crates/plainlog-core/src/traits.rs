//! Logger trait definition and errors

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::level::LogLevel;
use crate::message::LogMessage;

/// Errors raised by file-backed logging.
///
/// Console output never fails; these cover the log file only. A failed
/// append does not undo the console write that already happened.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be created or truncated at construction.
    #[error("failed to create log file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be appended to the log file.
    #[error("failed to append to log file {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type LogResult<T> = Result<T, LogError>;

/// Logging abstraction implemented by [`Logger`](crate::Logger) and
/// [`NoopLogger`](crate::NoopLogger).
///
/// Object-safe: the per-level convenience methods live on [`LogExt`] so the
/// trait stays usable behind `Box` or `Arc`.
pub trait Log: Send + Sync {
    /// Render and emit one entry at the given level.
    fn log(&self, level: LogLevel, message: LogMessage, label: Option<&str>) -> LogResult<()>;
}

/// Type alias for a boxed logger
pub type BoxedLog = Box<dyn Log>;

/// Type alias for an Arc-wrapped logger
pub type SharedLog = Arc<dyn Log>;

/// Extension trait adding the per-level logging methods
pub trait LogExt: Log {
    /// Log an error message or error-like value
    fn error(&self, message: impl Into<LogMessage>, label: Option<&str>) -> LogResult<()> {
        self.log(LogLevel::Error, message.into(), label)
    }

    /// Log a warning message
    fn warn(&self, message: impl Into<LogMessage>, label: Option<&str>) -> LogResult<()> {
        self.log(LogLevel::Warn, message.into(), label)
    }

    /// Log an info message
    fn info(&self, message: impl Into<LogMessage>, label: Option<&str>) -> LogResult<()> {
        self.log(LogLevel::Info, message.into(), label)
    }

    /// Log a debug message
    fn debug(&self, message: impl Into<LogMessage>, label: Option<&str>) -> LogResult<()> {
        self.log(LogLevel::Debug, message.into(), label)
    }

    /// Log a verbose message
    fn verbose(&self, message: impl Into<LogMessage>, label: Option<&str>) -> LogResult<()> {
        self.log(LogLevel::Verbose, message.into(), label)
    }
}

// Implement LogExt for all Log implementations
impl<T: Log + ?Sized> LogExt for T {}

/// Convenience macros for logging with format arguments. Each expands to the
/// `LogResult` expression, so callers decide what to do with failures.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format!($($arg)*), None)
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {
        $logger.verbose(format!($($arg)*), None)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Captures entries instead of emitting them.
    struct CapturingLogger {
        entries: Mutex<Vec<(LogLevel, String, Option<String>)>>,
    }

    impl CapturingLogger {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
            }
        }
    }

    impl Log for CapturingLogger {
        fn log(
            &self,
            level: LogLevel,
            message: LogMessage,
            label: Option<&str>,
        ) -> LogResult<()> {
            self.entries.lock().unwrap().push((
                level,
                message.render(),
                label.map(str::to_string),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_ext_methods_fix_the_level() {
        let logger = CapturingLogger::new();
        logger.error("e", None).unwrap();
        logger.warn("w", None).unwrap();
        logger.info("i", None).unwrap();
        logger.debug("d", None).unwrap();
        logger.verbose("v", Some("detail")).unwrap();

        let entries = logger.entries.lock().unwrap();
        let levels: Vec<LogLevel> = entries.iter().map(|e| e.0).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Error,
                LogLevel::Warn,
                LogLevel::Info,
                LogLevel::Debug,
                LogLevel::Verbose,
            ]
        );
        assert_eq!(entries[4].2.as_deref(), Some("detail"));
    }

    #[test]
    fn test_ext_methods_work_through_dyn() {
        let logger: SharedLog = Arc::new(CapturingLogger::new());
        logger.info("through a trait object", None).unwrap();
    }

    #[test]
    fn test_macros_forward_format_arguments() {
        let logger = CapturingLogger::new();
        log_info!(logger, "{} + {} = {}", 1, 2, 3).unwrap();
        log_error!(logger, "boom").unwrap();

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries[0].1, "1 + 2 = 3");
        assert_eq!(entries[1].0, LogLevel::Error);
    }
}
