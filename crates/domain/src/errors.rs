//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Latitude or longitude out of range
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Unknown travel mode name
    #[error("Invalid travel mode: {0}")]
    InvalidTravelMode(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
