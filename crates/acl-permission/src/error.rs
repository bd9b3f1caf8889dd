//! Error types for permission parsing
//!
//! Every variant carries the raw permission string that was rejected so the
//! caller can report it back as an invalid permission format.

use thiserror::Error;

/// Permission parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The string does not split into exactly two parts on `("`
    #[error("Invalid permission string format: \"{input}\"")]
    MalformedFormat {
        /// The permission string that failed to parse
        input: String,
    },

    /// More than one `/` in the dimension segment
    #[error("Only one dimension can be provided: \"{input}\"")]
    MultipleDimensions {
        /// The permission string that failed to parse
        input: String,
    },

    /// A `/` was present but the dimension after it is empty
    #[error("Dimension must not be empty: \"{input}\"")]
    EmptyDimension {
        /// The permission string that failed to parse
        input: String,
    },
}

/// Discriminant of a [`PermissionError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionErrorKind {
    MalformedFormat,
    MultipleDimensions,
    EmptyDimension,
}

/// Result type for permission operations.
pub type PermissionResult<T> = Result<T, PermissionError>;

impl PermissionError {
    pub fn kind(&self) -> PermissionErrorKind {
        match self {
            PermissionError::MalformedFormat { .. } => PermissionErrorKind::MalformedFormat,
            PermissionError::MultipleDimensions { .. } => PermissionErrorKind::MultipleDimensions,
            PermissionError::EmptyDimension { .. } => PermissionErrorKind::EmptyDimension,
        }
    }

    /// The raw permission string that was rejected.
    pub fn input(&self) -> &str {
        match self {
            PermissionError::MalformedFormat { input }
            | PermissionError::MultipleDimensions { input }
            | PermissionError::EmptyDimension { input } => input,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::MalformedFormat { .. } => "INVALID_PERMISSION_FORMAT",
            PermissionError::MultipleDimensions { .. } => "MULTIPLE_DIMENSIONS",
            PermissionError::EmptyDimension { .. } => "EMPTY_DIMENSION",
        }
    }
}
