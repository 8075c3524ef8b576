//! Shared error types for the application

use thiserror::Error;

/// Main error type for rentmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required record or weight field was absent
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A weight value outside the accepted range
    #[error("Invalid weight `{name}`: {value} (must be a finite, non-negative number)")]
    InvalidWeight { name: String, value: f64 },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = Error::missing_field("weights.transit");
        assert_eq!(err.to_string(), "Missing required field: weights.transit");
    }

    #[test]
    fn invalid_weight_includes_name_and_value() {
        let err = Error::InvalidWeight {
            name: "safety".to_string(),
            value: -0.2,
        };
        let msg = err.to_string();
        assert!(msg.contains("safety"));
        assert!(msg.contains("-0.2"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
