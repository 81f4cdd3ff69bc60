//! Error types for caretype-core
//!
//! Errors only cross the parse and configuration boundaries. Type inference
//! itself never fails: a miss degrades to a `"?"` label or no result.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for caretype operations
#[derive(Debug, Error)]
pub enum CaretypeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CaretypeError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        CaretypeError::Parse(msg.into())
    }
}

/// Result type alias for caretype operations
pub type Result<T> = std::result::Result<T, CaretypeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = CaretypeError::parse("Failed to set language");
        assert_eq!(err.to_string(), "Parse error: Failed to set language");
    }

    #[test]
    fn test_config_error_converts() {
        let err: CaretypeError = ConfigError::Validation("empty_label must not be empty".into()).into();
        assert!(matches!(err, CaretypeError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
