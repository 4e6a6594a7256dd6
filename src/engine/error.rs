use crate::units::{Bounds, Dimension};
use serde::Serialize;
use thiserror::Error;

/// Why a measurement was rejected, in the order the rules are checked
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationFailure {
    /// Height or weight field left empty
    #[error("Please enter both height and weight values.")]
    MissingInput,

    /// Field text is not a decimal number
    #[error("Please enter valid numbers.")]
    NotANumber {
        /// First field that failed to parse
        field: Dimension,
    },

    /// Zero or negative value
    #[error("Values must be positive numbers.")]
    NonPositiveValue {
        /// First field that was not positive
        field: Dimension,
    },

    #[error("Height must be {bounds} {unit}")]
    HeightOutOfRange { bounds: Bounds, unit: &'static str },

    #[error("Weight must be {bounds} {unit}")]
    WeightOutOfRange { bounds: Bounds, unit: &'static str },
}

impl ValidationFailure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationFailure::MissingInput => ErrorKind::MissingInput,
            ValidationFailure::NotANumber { .. } => ErrorKind::NotANumber,
            ValidationFailure::NonPositiveValue { .. } => ErrorKind::NonPositiveValue,
            ValidationFailure::HeightOutOfRange { .. } => ErrorKind::HeightOutOfRange,
            ValidationFailure::WeightOutOfRange { .. } => ErrorKind::WeightOutOfRange,
        }
    }

    /// Range the rejected value had to fall in, for range failures
    pub fn expected_range(&self) -> Option<Bounds> {
        match self {
            ValidationFailure::HeightOutOfRange { bounds, .. }
            | ValidationFailure::WeightOutOfRange { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            ValidationFailure::HeightOutOfRange { unit, .. }
            | ValidationFailure::WeightOutOfRange { unit, .. } => Some(unit),
            _ => None,
        }
    }
}

/// Everything the engine can report back to the presentation layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Numeric failure that validation could not rule out
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl BmiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BmiError::Validation(failure) => failure.kind(),
            BmiError::Calculation(_) => ErrorKind::CalculationError,
        }
    }

    pub fn expected_range(&self) -> Option<Bounds> {
        match self {
            BmiError::Validation(failure) => failure.expected_range(),
            BmiError::Calculation(_) => None,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            BmiError::Validation(failure) => failure.unit(),
            BmiError::Calculation(_) => None,
        }
    }
}

/// Flat tag for a failure, as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingInput,
    NotANumber,
    NonPositiveValue,
    HeightOutOfRange,
    WeightOutOfRange,
    CalculationError,
}
