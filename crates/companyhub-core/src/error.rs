//! Error types for companyhub-core

use thiserror::Error;

/// Main error type for companyhub-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
