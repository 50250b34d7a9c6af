//! Centralized error types for Scout.

use thiserror::Error;

/// Main error type for Scout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Query is required")]
    MissingQuery,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for Scout operations.
pub type ScoutResult<T> = Result<T, ScoutError>;

impl ScoutError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// Whether the error was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_message() {
        assert_eq!(ScoutError::MissingQuery.to_string(), "Query is required");
        assert!(ScoutError::MissingQuery.is_client_error());
    }

    #[test]
    fn test_config_is_server_error() {
        let err = ScoutError::config("empty host");
        assert_eq!(err.to_string(), "Configuration error: empty host");
        assert!(!err.is_client_error());
    }
}
