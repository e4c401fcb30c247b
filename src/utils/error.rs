//! Error handling for texnorm operations
//!
//! The transformation passes themselves are total functions over strings;
//! errors come from the surrounding surfaces (file IO in the CLI, value
//! marshalling in WASM) and from callers handing the pipeline something
//! it cannot accept.

use std::fmt;

/// Normalization/rendering error type.
#[derive(Debug, Clone)]
pub enum NormalizeError {
    /// Invalid input
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            NormalizeError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            NormalizeError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

impl From<std::io::Error> for NormalizeError {
    fn from(err: std::io::Error) -> Self {
        NormalizeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

// Convenience constructors
impl NormalizeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        NormalizeError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        NormalizeError::InternalError {
            message: message.into(),
        }
    }
}
