//! Error types for Tooldex
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Tooldex
#[derive(Debug, Error)]
pub enum TooldexError {
    /// Provider credential absent from the environment
    #[error("Missing API key: environment variable {env_var} not set")]
    MissingApiKey { env_var: String },

    /// Description provider request failed (network, status, quota)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider answered but the body had no usable text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Export requested while descriptions are still loading
    #[error("Export unavailable: {pending} description(s) still loading")]
    ExportUnavailable { pending: usize },

    /// Configuration could not be loaded or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tooldex operations
pub type Result<T> = std::result::Result<T, TooldexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error() {
        let err = TooldexError::MissingApiKey {
            env_var: "API_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "Missing API key: environment variable API_KEY not set");
    }

    #[test]
    fn test_provider_error() {
        let err = TooldexError::Provider("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Provider error: quota exceeded");
    }

    #[test]
    fn test_export_unavailable_error() {
        let err = TooldexError::ExportUnavailable { pending: 3 };
        assert_eq!(err.to_string(), "Export unavailable: 3 description(s) still loading");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TooldexError = io_err.into();
        assert!(matches!(err, TooldexError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TooldexError = json_err.into();
        assert!(matches!(err, TooldexError::Json(_)));
    }
}
