//! Error type shared by every component of the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LambdataError>;

/// Fieldless tag for each failure, handy when callers only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgumentType,
    PercentageOverflow,
    ZeroDivision,
    LengthMismatch,
    LookupMiss,
    DivideByZeroInput,
}

/// Everything that can go wrong in this crate.
///
/// Each variant is returned, never panicked; the `Display` text is the message
/// a caller should surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LambdataError {
    /// A percentage, seed or fraction was not a usable number.
    #[error("{0}")]
    InvalidArgumentType(String),

    /// Train and validation percentages add up to more than 100.
    #[error("Input Percentages > 100 (train = {train}, validate = {validate})")]
    PercentageOverflow { train: f64, validate: f64 },

    /// Train and validation percentages add up to zero, so the validation
    /// fraction `validate / (train + validate)` has no value.
    #[error("Train and validation percentages sum to zero; cannot derive a validation fraction")]
    ZeroDivision,

    /// Features and labels do not have one label per record.
    #[error("features and labels differ in length ({features} vs {labels})")]
    LengthMismatch { features: usize, labels: usize },

    /// No state entry matched the given code or name.
    #[error("no state entry matches {0:?}")]
    LookupMiss(String),

    /// Component-wise divide with a zero component in the divisor.
    #[error("zero-divide attempted, inputs = ({re}, {im})")]
    DivideByZeroInput { re: f64, im: f64 },
}

impl LambdataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LambdataError::InvalidArgumentType(_) => ErrorKind::InvalidArgumentType,
            LambdataError::PercentageOverflow { .. } => ErrorKind::PercentageOverflow,
            LambdataError::ZeroDivision => ErrorKind::ZeroDivision,
            LambdataError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            LambdataError::LookupMiss(_) => ErrorKind::LookupMiss,
            LambdataError::DivideByZeroInput { .. } => ErrorKind::DivideByZeroInput,
        }
    }
}
