//! Custom error types for the doing application
//!
//! This module provides structured error handling using thiserror,
//! with specific, actionable error types for the few things that can
//! actually fail in this application.

use thiserror::Error;

/// Main error type for the doing application
#[derive(Error, Debug)]
pub enum DoingError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Generic error for glue code that reports through anyhow
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration file: {0}")]
    SaveFailed(String),

    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(String),
}

/// Validation errors
///
/// The board rejects exactly one thing: adding an activity with an empty
/// code. Every other core operation is total.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Activity code must not be empty")]
    EmptyCode,
}

/// Result type alias for the doing application
pub type Result<T> = std::result::Result<T, DoingError>;

impl From<anyhow::Error> for DoingError {
    fn from(err: anyhow::Error) -> Self {
        DoingError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DoingError::Config(ConfigError::NoConfigDir);
        assert!(err.to_string().contains("config directory"));

        let err = DoingError::Validation(ValidationError::EmptyCode);
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let doing_err: DoingError = io_err.into();
        assert!(matches!(doing_err, DoingError::Io(_)));
    }
}
