//! Pure imaginary numbers over big rationals.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use once_cell::sync::Lazy;
use quotient_rational::{BigRational, FixedBigRational, FloatingBigRational};

use crate::error::ComplexError;

/// The imaginary unit `i` over fixed rationals.
pub static I: Lazy<FixedBigImaginary> = Lazy::new(FixedBigImaginary::unit);

/// A real multiple of `i`.
///
/// Imaginaries form a group under addition but are not closed under
/// multiplication: `ai * bi` is the real number `-ab`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigImaginary<T>(T);

/// Imaginaries whose coefficient never leaves the real line.
pub type FixedBigImaginary = BigImaginary<FixedBigRational>;

/// Imaginaries whose coefficient may be infinite or NaN.
pub type FloatingBigImaginary = BigImaginary<FloatingBigRational>;

impl<T: BigRational> BigImaginary<T> {
    /// `value * i`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// `i`
    #[must_use]
    pub fn unit() -> Self {
        Self(T::one())
    }

    /// `0i`
    #[must_use]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    /// The real coefficient of `i`.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Returns true for `0i`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `1 / (bi)`, which is `-(1/b) i`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] for a fixed `0i`. The
    /// floating `0i` inverts to negative infinity times `i`.
    pub fn checked_recip(&self) -> Result<Self, ComplexError> {
        let inverse = self
            .0
            .checked_recip()
            .map_err(|_| ComplexError::DivisionByZero)?;
        Ok(Self(-inverse))
    }
}

impl<T: BigRational> fmt::Debug for BigImaginary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigImaginary<{}>({self})", T::VARIANT)
    }
}

impl<T: BigRational> fmt::Display for BigImaginary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i", self.0)
    }
}

impl<T: BigRational> From<T> for BigImaginary<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: BigRational> Add for BigImaginary<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: BigRational> Sub for BigImaginary<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// `ai * bi = -ab`
impl<T: BigRational> Mul for BigImaginary<T> {
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        -(self.0 * rhs.0)
    }
}

impl<T: BigRational> Mul<T> for BigImaginary<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// `ai / bi = a / b`
///
/// # Panics
///
/// Panics if `rhs` is a fixed zero.
impl<T: BigRational> Div for BigImaginary<T> {
    type Output = T;

    fn div(self, rhs: Self) -> Self::Output {
        match self.0.checked_div(&rhs.0) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

forward_ref_binop!(impl Add, add for BigImaginary<T>, BigImaginary<T> => BigImaginary<T>);
forward_ref_binop!(impl Sub, sub for BigImaginary<T>, BigImaginary<T> => BigImaginary<T>);
forward_ref_binop!(impl Mul, mul for BigImaginary<T>, BigImaginary<T> => T);
forward_ref_binop!(impl Mul, mul for BigImaginary<T>, T => BigImaginary<T>);
forward_ref_binop!(impl Div, div for BigImaginary<T>, BigImaginary<T> => T);

impl<T: BigRational> Neg for BigImaginary<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: BigRational> Neg for &BigImaginary<T> {
    type Output = BigImaginary<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// `rational * imaginary` for each concrete rational, since a foreign
/// type parameter cannot be the receiver of a generic impl.
macro_rules! scale_imaginary {
    ($($R:ty),*) => {$(
        impl Mul<BigImaginary<$R>> for $R {
            type Output = BigImaginary<$R>;

            fn mul(self, rhs: BigImaginary<$R>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<&BigImaginary<$R>> for &$R {
            type Output = BigImaginary<$R>;

            fn mul(self, rhs: &BigImaginary<$R>) -> Self::Output {
                rhs.clone() * self.clone()
            }
        }
    )*};
}

scale_imaginary!(FixedBigRational, FloatingBigRational);
