//! Builder error types

use thiserror::Error;

use crate::path::FieldPath;

/// Errors that can occur while addressing or mutating the field tree
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Index does not address an existing field in the target sequence
    #[error("Index {index} out of bounds: sequence has {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A path segment does not address an existing field
    #[error("No field at path {path}")]
    PathNotFound { path: FieldPath },

    /// A path segment addresses a field that has no children
    #[error("Field at {path} is not nested and has no children")]
    NotNested { path: FieldPath },

    /// Path text could not be parsed
    #[error("Invalid field path: '{0}'")]
    InvalidPath(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
