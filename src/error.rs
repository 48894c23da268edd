//! Typed failures raised by the record model and the roster. Every variant is
//! recoverable: the UI turns it into a footer message and keeps running.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A student with this id is already on the roster.
    #[error("Student ID {0} is already in use.")]
    DuplicateId(String),

    #[error("Student {0} not found.")]
    NotFound(String),

    /// Carries the rejected value as the user typed it (or as formatted when it
    /// came in as a number).
    #[error("Score must be a number between 0 and 100 (got {0}).")]
    InvalidScore(String),

    /// Names the field that was empty after trimming.
    #[error("{0} must not be empty.")]
    InvalidInput(&'static str),
}

pub type RecordResult<T> = Result<T, RecordError>;
