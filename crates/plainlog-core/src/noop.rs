//! No-op logger implementation

use crate::level::LogLevel;
use crate::message::LogMessage;
use crate::traits::{Log, LogResult};

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Log for NoopLogger {
    fn log(&self, _level: LogLevel, _message: LogMessage, _label: Option<&str>) -> LogResult<()> {
        Ok(())
    }
}
