//! # quotient-rational
//!
//! Exact big rationals in two flavours sharing one contract,
//! [`BigRational`]:
//!
//! - [`FixedBigRational`] stays on the real line; a zero denominator or
//!   divisor is a [`RationalError::DivisionByZero`].
//! - [`FloatingBigRational`] models the extended line, where `n/0` is a
//!   signed infinity and `0/0` is the single canonical NaN.
//!
//! Built on that contract are lazy stepped [`Progression`]s, the
//! [`cantor`] enumerations of the rationals, and [`ContinuedFraction`]
//! expansions.
//!
//! ## Example
//!
//! ```
//! use quotient_rational::{FixedBigRational, Progression};
//!
//! let half = FixedBigRational::over(1, 2).unwrap();
//! let steps: Vec<_> = Progression::range_to(FixedBigRational::zero(), FixedBigRational::one())
//!     .step(half)
//!     .unwrap()
//!     .iter()
//!     .map(|value| value.unwrap().to_string())
//!     .collect();
//! assert_eq!(steps, ["0", "1/2", "1"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod base;
pub mod cantor;
pub mod continued_fraction;
pub mod equivalence;
pub mod error;
pub mod fixed;
pub mod floating;
pub mod parse;
pub mod progression;

#[cfg(test)]
mod proptests;

pub use base::BigRational;
pub use continued_fraction::ContinuedFraction;
pub use equivalence::equivalent;
pub use error::{ProgressionError, RationalError};
pub use fixed::FixedBigRational;
pub use floating::FloatingBigRational;
pub use progression::Progression;
