//! Plainlog Core
//!
//! Minimal leveled logging: timestamped, optionally labelled entries are
//! mirrored to stdout and appended to a single log file owned by the logger
//! for its lifetime.
//!
//! ```no_run
//! use plainlog_core::{LogExt, Logger, LoggerConfig};
//!
//! let logger = Logger::with_config(
//!     LoggerConfig::new()
//!         .with_folder("/var/log/myapp")
//!         .with_file_name("myapp.log"),
//! )?;
//!
//! logger.info("listening on 0.0.0.0:8080", None)?;
//! logger.warn("disk low", Some("storage"))?;
//! # Ok::<(), plainlog_core::LogError>(())
//! ```
//!
//! Entries render as `[DD-MM-YYYY H:M:S] [LEVEL] [label] | message`; bodies
//! containing newlines (stack traces, typically) are framed between
//! separator lines with every source line kept verbatim.

pub mod config;
pub mod format;
pub mod level;
pub mod logger;
pub mod message;
pub mod noop;
pub mod traits;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use format::{date_as_string, message_as_string, SEPARATOR};
pub use level::{tag_for_value, LogLevel};
pub use logger::Logger;
pub use message::{ErrorLike, LogMessage};
pub use noop::NoopLogger;
pub use traits::{BoxedLog, Log, LogError, LogExt, LogResult, SharedLog};
