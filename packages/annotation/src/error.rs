//! Annotation Errors
//!
//! Errors raised at the typed boundary: converting an annotation value into a
//! concrete field type, and loading injector configuration. Extraction itself
//! never fails.

use thiserror::Error;

/// Error type for typed annotation access
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} does not fit into {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("invalid injector configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl AnnotationError {
    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        AnnotationError::TypeMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
