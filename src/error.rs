//! Error types for Trove
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Trove
#[derive(Debug, Error)]
pub enum TroveError {
    /// Remote store rejected or failed a request
    #[error("Store error: {0}")]
    Store(String),

    /// Document not found in the collection
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Session/auth handling error
    #[error("Auth error: {0}")]
    Auth(String),

    /// Terminal/UI error
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Trove operations
pub type Result<T> = std::result::Result<T, TroveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error() {
        let err = TroveError::Store("503 service unavailable".to_string());
        assert_eq!(err.to_string(), "Store error: 503 service unavailable");
    }

    #[test]
    fn test_document_not_found_error() {
        let err = TroveError::DocumentNotFound("abc123".to_string());
        assert_eq!(err.to_string(), "Document not found: abc123");
    }

    #[test]
    fn test_auth_error() {
        let err = TroveError::Auth("session file unreadable".to_string());
        assert_eq!(err.to_string(), "Auth error: session file unreadable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TroveError = io_err.into();
        assert!(matches!(err, TroveError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TroveError = json_err.into();
        assert!(matches!(err, TroveError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TroveError::Store("down".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
