use thiserror::Error;

/// Errors that can occur when validating post input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
