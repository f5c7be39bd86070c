//! Error types for building records and loading configuration
//!
//! Normalization itself never fails; these errors only surface where text is
//! parsed into a record or a configuration.

use thiserror::Error;

/// Errors that can occur before a record reaches the normalizer
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Payload is not valid JSON
    #[error("Failed to decode JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is valid JSON but not an object
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(String),

    /// Configuration value out of range
    #[error("Invalid configuration for {field}: {details}")]
    InvalidConfig { field: String, details: String },
}

/// Result type for fallible boundary operations
pub type Result<T> = std::result::Result<T, NormalizeError>;
