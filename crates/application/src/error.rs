//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Marker storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::InvalidTravelMode("plane".to_string()).into();
        assert_eq!(err.to_string(), "Invalid travel mode: plane");
    }

    #[test]
    fn external_service_error_display() {
        let err = ApplicationError::ExternalService("No position configured".to_string());
        assert_eq!(err.to_string(), "External service error: No position configured");
    }

    #[test]
    fn storage_error_display() {
        let err = ApplicationError::Storage("corrupt file".to_string());
        assert_eq!(err.to_string(), "Storage error: corrupt file");
    }
}
