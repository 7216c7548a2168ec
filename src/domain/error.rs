//! Domain error types

use thiserror::Error;

/// Error when a notification line cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationParseError {
    #[error("Empty notification")]
    Empty,

    #[error("Unknown notification action: \"{0}\". Expected: outgoing, state, android.intent.action.NEW_OUTGOING_CALL or android.intent.action.PHONE_STATE")]
    UnknownAction(String),

    #[error("Notification \"{action}\" is missing its {field}")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },
}

/// Error when a platform integer code has no known meaning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} code: {code}")]
pub struct InvalidCode {
    pub kind: &'static str,
    pub code: i32,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file: {0}")]
    ReadError(String),

    #[error("Failed to parse preferences file: {0}")]
    ParseError(String),

    #[error("Failed to write preferences file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Invalid argument for '{key}': {message}")]
    InvalidArgument { key: String, message: String },

    #[error("Preferences file already exists at: {0}")]
    AlreadyExists(String),
}

impl ConfigError {
    /// Shorthand for the error returned when a name or path is empty
    pub fn empty_argument(key: &str) -> Self {
        Self::InvalidArgument {
            key: key.to_string(),
            message: "value can not be empty".to_string(),
        }
    }
}
