//! Error types for the smartbeta engine.
//!
//! Ranking is a pure in-memory computation, so almost every failure is a
//! rejected input. Normal-but-empty outcomes (no matching strategy, empty
//! universe) are not errors and never show up here.

use thiserror::Error;

/// The main error type for smartbeta operations.
#[derive(Debug, Error)]
pub enum SmartBetaError {
    /// A caller-supplied value is out of range, non-finite, or missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required column is missing from a tabular universe.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while reading configuration or data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A strategy lookup by name failed.
    #[error("Strategy not found: {0}")]
    StrategyNotFound(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl SmartBetaError {
    /// Shorthand for an [`SmartBetaError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<String> for SmartBetaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for SmartBetaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for smartbeta operations.
pub type Result<T> = std::result::Result<T, SmartBetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmartBetaError::invalid("limit must be positive");
        assert_eq!(err.to_string(), "Invalid argument: limit must be positive");

        let err = SmartBetaError::MissingColumn("roe".to_string());
        assert_eq!(err.to_string(), "Missing required column: roe");
    }

    #[test]
    fn test_error_from_string() {
        let err: SmartBetaError = "boom".into();
        assert!(matches!(err, SmartBetaError::Other(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: SmartBetaError = parse.unwrap_err().into();
        assert!(matches!(err, SmartBetaError::Json(_)));
    }
}
