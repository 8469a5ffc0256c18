//! Error types for complex arithmetic.

use quotient_rational::RationalError;
use thiserror::Error;

/// Errors raised by complex construction, narrowing and division.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Division by, or reciprocal of, zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value has a non-zero imaginary part.
    #[error("{value} is not real")]
    NotReal {
        /// The rendering of the offending value.
        value: String,
    },

    /// The value has a non-zero real part.
    #[error("{value} is not imaginary")]
    NotImaginary {
        /// The rendering of the offending value.
        value: String,
    },

    /// A failure in the underlying rational arithmetic.
    #[error(transparent)]
    Rational(#[from] RationalError),
}
