//! Error types for the Sence application.

use thiserror::Error;

/// The main error type for Sence.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Coupon submission errors
    #[error("Submission error: {0}")]
    Submission(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new submission error.
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Submission(_) | Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_errors_are_recoverable() {
        assert!(Error::submission("backend unavailable").is_recoverable());
        assert!(!Error::config("bad toml").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("unknown question 42");
        assert_eq!(err.to_string(), "Invalid input: unknown question 42");
    }
}
