//! Log message payloads
//!
//! A message is either plain text or an error-like value carrying a name, an
//! optional description and an optional stack trace. Both normalize to a
//! plain string before formatting.

/// An error-like log payload.
///
/// # Example
///
/// ```
/// use plainlog_core::ErrorLike;
///
/// let err = ErrorLike::new("TimeoutError").with_description("request timed out");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLike {
    name: String,
    description: Option<String>,
    stack: Option<String>,
}

impl ErrorLike {
    /// Create an error-like payload with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            stack: None,
        }
    }

    /// Attach a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a stack trace; when present it replaces the rendered body.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture a standard error value, using its display form as description.
    pub fn from_error(name: impl Into<String>, error: &dyn std::error::Error) -> Self {
        Self::new(name).with_description(error.to_string())
    }

    /// Normalized body: the stack verbatim when present, otherwise
    /// `name: description`, otherwise the name alone.
    pub fn render(&self) -> String {
        if let Some(stack) = &self.stack {
            return stack.clone();
        }
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{}: {}", self.name, description)
            }
            _ => self.name.clone(),
        }
    }
}

/// A log message: plain text or an error-like value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    /// Plain text, used as given.
    Text(String),
    /// Error-like value, normalized via [`ErrorLike::render`].
    Failure(ErrorLike),
}

impl LogMessage {
    /// Normalized message body handed to the entry renderer.
    pub fn render(&self) -> String {
        match self {
            LogMessage::Text(text) => text.clone(),
            LogMessage::Failure(error) => error.render(),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(text: &str) -> Self {
        LogMessage::Text(text.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(text: String) -> Self {
        LogMessage::Text(text)
    }
}

impl From<ErrorLike> for LogMessage {
    fn from(error: ErrorLike) -> Self {
        LogMessage::Failure(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_as_given() {
        let message = LogMessage::from("plain text");
        assert_eq!(message.render(), "plain text");
    }

    #[test]
    fn test_stack_renders_verbatim() {
        let error = ErrorLike::new("Error")
            .with_description("something broke")
            .with_stack("Error: something broke\n    at main");
        assert_eq!(error.render(), "Error: something broke\n    at main");
    }

    #[test]
    fn test_name_and_description_without_stack() {
        let error = ErrorLike::new("TimeoutError").with_description("request timed out");
        assert_eq!(error.render(), "TimeoutError: request timed out");
    }

    #[test]
    fn test_bare_name_when_description_missing() {
        assert_eq!(ErrorLike::new("TimeoutError").render(), "TimeoutError");
        assert_eq!(
            ErrorLike::new("TimeoutError").with_description("").render(),
            "TimeoutError"
        );
    }

    #[test]
    fn test_from_error_uses_display_form() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = ErrorLike::from_error("IoError", &io_err);
        assert_eq!(error.render(), "IoError: no such file");
    }
}
