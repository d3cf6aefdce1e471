//! Error types for the engine.
//!
//! The pure aggregation core never fails on malformed data; it degrades to
//! documented defaults. Errors only exist at the port boundary, where
//! upstream fetches can genuinely fail, and in fallible value-object
//! construction.

use thiserror::Error;

use super::TripId;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by ports and application handlers.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    #[error("Upstream fetch failed: {0}")]
    Upstream(String),
}

impl EngineError {
    /// Creates an upstream fetch error.
    pub fn upstream(message: impl Into<String>) -> Self {
        EngineError::Upstream(message.into())
    }
}
