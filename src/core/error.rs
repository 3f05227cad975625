//! # Errors
//!
//! Every failure the engine can report. Validation runs before any history
//! append, so an `Err` always means the history is untouched.

use thiserror::Error;

/// Message for a non-finite operand to a binary operation
pub(crate) const NON_FINITE_OPERAND: &str = "only finite numbers are accepted";

/// Message for a non-finite element passed to `average`
pub(crate) const NON_FINITE_ELEMENT: &str = "all elements must be finite numbers";

/// Errors returned by [`Calculator`](crate::Calculator) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An input was NaN or infinite
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `divide` was called with a zero divisor
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// `average` was called with no numbers
    #[error("cannot compute the average of an empty sequence")]
    EmptyInput,
}

/// Fieldless discriminant of [`CalcError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    DivisionByZero,
    EmptyInput,
}

impl CalcError {
    pub(crate) fn invalid(message: &str) -> Self {
        CalcError::InvalidArgument(message.to_string())
    }

    /// Which kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

/// Result alias for engine operations
pub type CalcResult<T> = Result<T, CalcError>;
