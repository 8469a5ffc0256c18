//! # quotient-complex
//!
//! Complex numbers over exact big rationals.
//!
//! [`BigImaginary`] is a real multiple of `i`; adding one to a rational gives
//! a [`BigComplex`]. Both are generic over the rational variant:
//! [`FixedBigComplex`] is a field where division by zero is an error, while
//! [`FloatingBigComplex`] lets division by zero produce infinite or NaN parts.
//! Arithmetic is exact, so identities such as `z * conj(z) = a² + b²` hold
//! with an imaginary part of exactly zero.
//!
//! ```
//! use quotient_complex::{FixedBigComplex, I};
//! use quotient_rational::FixedBigRational;
//!
//! let z = FixedBigRational::two() + I.clone();
//! assert_eq!((&z * &z.conjugate()).to_real().unwrap(), z.norm());
//! assert_eq!(z.to_string(), "2+1i");
//! # let _: FixedBigComplex = z;
//!
//! use quotient_complex::FloatingBigComplex;
//! use quotient_rational::{BigRational, FloatingBigRational};
//!
//! let w = FloatingBigComplex::from_parts(FloatingBigRational::one(), FloatingBigRational::one());
//! assert!((w / FloatingBigComplex::zero()).real().is_nan());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Implements the borrowed forms `&a op &b` and `a op &b` of a binary
/// operator over `T: BigRational` by cloning into the owned form.
macro_rules! forward_ref_binop {
    (impl $Op:ident, $op:ident for $Lhs:ty, $Rhs:ty => $Out:ty) => {
        impl<T: quotient_rational::BigRational> $Op<&$Rhs> for &$Lhs {
            type Output = $Out;

            fn $op(self, rhs: &$Rhs) -> $Out {
                $Op::$op(self.clone(), rhs.clone())
            }
        }

        impl<T: quotient_rational::BigRational> $Op<&$Rhs> for $Lhs {
            type Output = $Out;

            fn $op(self, rhs: &$Rhs) -> $Out {
                $Op::$op(self, rhs.clone())
            }
        }
    };
}

pub mod complex;
pub mod error;
pub mod imaginary;

#[cfg(test)]
mod proptests;

pub use complex::{BigComplex, FixedBigComplex, FloatingBigComplex};
pub use error::ComplexError;
pub use imaginary::{BigImaginary, FixedBigImaginary, FloatingBigImaginary, I};
