//! Error types for the terminal engine.
//!
//! - [`CommandError`] - Faults raised by a command handler while computing output
//! - [`ConfigError`] - Invalid session or registry configuration

use thiserror::Error;

/// A handler fault.
///
/// The session engine never propagates these; it renders them as an
/// error-kind transcript line of the form `Error: {message}`.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input was not valid Base64
    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),
    /// Decoded bytes were not valid UTF-8
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    /// An analysis rule failed to compile
    #[error("analysis rule failed: {0}")]
    Rule(#[from] regex::Error),
    /// Free-form fault, mainly for caller-supplied handlers
    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Configuration errors detected while building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A custom command was registered without a name
    #[error("command name must not be empty")]
    EmptyCommandName,
    /// A custom command name contains whitespace and could never be typed
    #[error("invalid command name '{0}': names cannot contain whitespace")]
    InvalidCommandName(String),
    /// Session options could not be parsed
    #[error("invalid session options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Options(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn test_decode_error_message() {
        let err = base64::engine::general_purpose::STANDARD
            .decode("!!!")
            .map_err(CommandError::from)
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid base64 input"));
    }

    #[test]
    fn test_failed_message_verbatim() {
        assert_eq!(CommandError::failed("boom").to_string(), "boom");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::InvalidCommandName("a b".to_string()).to_string(),
            "invalid command name 'a b': names cannot contain whitespace"
        );
    }
}
