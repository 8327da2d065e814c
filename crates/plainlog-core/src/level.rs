//! Log severity levels

/// Severity of a log entry.
///
/// The discriminants are part of the public contract and must never change:
/// callers may persist or exchange the raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Error events.
    Error = 0,
    /// Potentially harmful situations.
    Warn = 1,
    /// Coarse-grained progress messages.
    Info = 2,
    /// Fine-grained diagnostic messages.
    Debug = 3,
    /// Very fine-grained trace output.
    Verbose = 4,
}

impl LogLevel {
    /// Stable numeric identity of this level.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look a level up by its numeric identity.
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Error),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Debug),
            4 => Some(LogLevel::Verbose),
            _ => None,
        }
    }

    /// Bracketed tag rendered into log entries.
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "[ERROR]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Verbose => "[VERBOSE]",
        }
    }
}

/// Tag for a raw level value.
///
/// Values outside the enumeration render as `[UNKNOWN]` so entries logged
/// with a level this crate does not know yet still come out tagged.
pub fn tag_for_value(value: u8) -> &'static str {
    match LogLevel::from_value(value) {
        Some(level) => level.tag(),
        None => "[UNKNOWN]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_values_are_stable() {
        let values = format!(
            "{}|{}|{}|{}|{}",
            LogLevel::Error.value(),
            LogLevel::Warn.value(),
            LogLevel::Info.value(),
            LogLevel::Debug.value(),
            LogLevel::Verbose.value(),
        );
        assert_eq!(values, "0|1|2|3|4");
    }

    #[test]
    fn test_from_value_round_trips() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Verbose,
        ] {
            assert_eq!(LogLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(LogLevel::from_value(5), None);
        assert_eq!(LogLevel::from_value(255), None);
    }

    #[test]
    fn test_tags() {
        assert_eq!(LogLevel::Error.tag(), "[ERROR]");
        assert_eq!(LogLevel::Warn.tag(), "[WARN]");
        assert_eq!(LogLevel::Info.tag(), "[INFO]");
        assert_eq!(LogLevel::Debug.tag(), "[DEBUG]");
        assert_eq!(LogLevel::Verbose.tag(), "[VERBOSE]");
    }

    #[test]
    fn test_unknown_value_tag() {
        assert_eq!(tag_for_value(2), "[INFO]");
        assert_eq!(tag_for_value(7), "[UNKNOWN]");
    }
}
