//! Error types for role parsing
//!
//! This module defines the errors raised when a role string does not follow
//! the `kind[:identifier][/dimension]` grammar.

use thiserror::Error;

/// Role parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// More than one `/` was found where a single dimension is expected
    #[error("Only one dimension can be provided: \"{input}\"")]
    MultipleDimensions {
        /// The role string that failed to parse
        input: String,
    },

    /// A `/` was present but nothing follows it
    #[error("Dimension must not be empty: \"{input}\"")]
    EmptyDimension {
        /// The role string that failed to parse
        input: String,
    },
}

/// Result type for role operations.
pub type RoleResult<T> = Result<T, RoleError>;

impl RoleError {
    /// The raw role string that was rejected.
    pub fn input(&self) -> &str {
        match self {
            RoleError::MultipleDimensions { input } | RoleError::EmptyDimension { input } => input,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RoleError::MultipleDimensions { .. } => "MULTIPLE_DIMENSIONS",
            RoleError::EmptyDimension { .. } => "EMPTY_DIMENSION",
        }
    }
}
