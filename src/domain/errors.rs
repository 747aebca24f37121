// ============================================================================
// Root Computation Errors
// Failures surfaced by numeral parsing, grouping and engine setup
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Which part of a `<whole>.<fraction>` numeral was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralPart {
    /// Digits before the decimal point
    Whole,
    /// Digits after the decimal point
    Fraction,
    /// The numeral as a whole (decimal point missing or repeated)
    Numeral,
}

impl fmt::Display for NumeralPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralPart::Whole => write!(f, "whole part"),
            NumeralPart::Fraction => write!(f, "fractional part"),
            NumeralPart::Numeral => write!(f, "numeral"),
        }
    }
}

/// Errors that stop a square root computation before it starts.
///
/// The digit loop itself cannot fail, so every variant is raised either while
/// validating input or while validating the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqrtError {
    /// Input is not of the form `<digits>.<digits>`
    MalformedNumeral {
        part: NumeralPart,
        reason: String,
    },
    /// Grouping produced no groups at all
    EmptyGroupSequence,
    /// Engine configuration was rejected
    InvalidConfig(String),
    /// Deserialized groups or results break a construction invariant
    InvalidRecord(String),
    /// Exact decimal conversion failed
    Numeric(NumericError),
}

impl SqrtError {
    pub(crate) fn malformed(part: NumeralPart, reason: impl Into<String>) -> Self {
        SqrtError::MalformedNumeral {
            part,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SqrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqrtError::MalformedNumeral { part, reason } => {
                write!(f, "malformed numeral: {} {}", part, reason)
            },
            SqrtError::EmptyGroupSequence => {
                write!(f, "numeral produced no digit groups")
            },
            SqrtError::InvalidConfig(reason) => write!(f, "invalid engine configuration: {}", reason),
            SqrtError::InvalidRecord(reason) => write!(f, "invalid record: {}", reason),
            SqrtError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for SqrtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SqrtError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for SqrtError {
    fn from(err: NumericError) -> Self {
        SqrtError::Numeric(err)
    }
}

/// Result type alias for root computations
pub type SqrtResult<T> = Result<T, SqrtError>;
