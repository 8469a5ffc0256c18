//! Error types for rational arithmetic and progressions.

use thiserror::Error;

/// Errors raised by rational construction, conversion and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A fixed rational was given a zero denominator or divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A non-finite value has no finite rational counterpart.
    #[error("{value} is not finite")]
    NonFinite {
        /// The rendering of the offending value.
        value: String,
    },

    /// The text is not a rational literal.
    #[error("cannot parse {input:?} as a rational")]
    Parse {
        /// The rejected input.
        input: String,
    },

    /// The value has no exact rational square or cube root.
    #[error("no exact rational root: {value}")]
    NoExactRoot {
        /// The rendering of the offending value.
        value: String,
    },
}

/// Errors raised when building or walking a progression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// The step is zero or points against the progression's direction.
    #[error("step {step} is invalid for a {direction} progression")]
    InvalidStep {
        /// The rejected step.
        step: String,
        /// Either "ascending" or "descending".
        direction: &'static str,
    },

    /// The progression cannot decide when its bound has been reached.
    #[error("illegal progression state: {reason}")]
    IllegalProgressionState {
        /// What made the progression unwalkable.
        reason: String,
    },
}
