//! Complex numbers with exact rational parts.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use quotient_rational::{BigRational, FixedBigRational, FloatingBigRational};
use quotient_rings::{CommutativeRing, Field, Ring};
use tracing::debug;

use crate::error::ComplexError;
use crate::imaginary::BigImaginary;

/// `a + bi` with `a` and `b` big rationals of the same variant.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigComplex<T> {
    real: T,
    imag: BigImaginary<T>,
}

/// Complex numbers over fixed rationals; these form a field.
pub type FixedBigComplex = BigComplex<FixedBigRational>;

/// Complex numbers over floating rationals, where division by zero yields
/// infinite or NaN parts instead of an error.
pub type FloatingBigComplex = BigComplex<FloatingBigRational>;

impl<T: BigRational> BigComplex<T> {
    /// `real + imag`.
    #[must_use]
    pub fn new(real: T, imag: BigImaginary<T>) -> Self {
        Self { real, imag }
    }

    /// `real + imag * i`.
    #[must_use]
    pub fn from_parts(real: T, imag: T) -> Self {
        Self::new(real, BigImaginary::new(imag))
    }

    /// `0 + 0i`
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), BigImaginary::zero())
    }

    /// `1 + 0i`
    #[must_use]
    pub fn one() -> Self {
        Self::new(T::one(), BigImaginary::zero())
    }

    /// The real part.
    #[must_use]
    pub fn real(&self) -> &T {
        &self.real
    }

    /// The imaginary part.
    #[must_use]
    pub fn imag(&self) -> &BigImaginary<T> {
        &self.imag
    }

    /// Returns true for `0 + 0i`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    /// Returns true for `1 + 0i`.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.real.is_one() && self.imag.is_zero()
    }

    /// `a - bi`
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -&self.imag)
    }

    /// `a² + b²`, the product of a value with its conjugate.
    #[must_use]
    pub fn norm(&self) -> T {
        self.real.clone() * self.real.clone() - &self.imag * &self.imag
    }

    /// The exact modulus `sqrt(a² + b²)`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::Rational`] wrapping
    /// [`RationalError::NoExactRoot`](quotient_rational::RationalError::NoExactRoot)
    /// when the norm is not the square of a rational.
    pub fn abs(&self) -> Result<T, ComplexError> {
        Ok(self.norm().sqrt()?)
    }

    /// `1 / (a + bi) = (a - bi) / (a² + b²)`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] for a fixed zero. The
    /// floating zero inverts to NaN parts.
    pub fn checked_recip(&self) -> Result<Self, ComplexError> {
        let scale = self.norm().checked_recip().map_err(|_| {
            debug!(variant = T::VARIANT, value = %self, "complex reciprocal of zero");
            ComplexError::DivisionByZero
        })?;
        Ok(self.conjugate() * scale)
    }

    /// Divides by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] when `other` is a fixed
    /// zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ComplexError> {
        Ok(self * &other.checked_recip()?)
    }

    /// Raises to an integer power, negative exponents through the
    /// reciprocal. `z^0` is one, zero included.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] for a negative power of a
    /// fixed zero.
    pub fn powi(&self, exponent: i32) -> Result<Self, ComplexError> {
        let mut square = if exponent < 0 {
            self.checked_recip()?
        } else {
            self.clone()
        };
        let mut remaining = exponent.unsigned_abs();
        let mut product = Self::one();

        while remaining > 0 {
            if remaining & 1 == 1 {
                product = &product * &square;
            }
            remaining >>= 1;
            if remaining > 0 {
                square = &square * &square;
            }
        }

        Ok(product)
    }

    /// Narrows to the real part.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::NotReal`] if the imaginary part is non-zero.
    pub fn to_real(&self) -> Result<T, ComplexError> {
        if self.imag.is_zero() {
            Ok(self.real.clone())
        } else {
            Err(ComplexError::NotReal {
                value: self.to_string(),
            })
        }
    }

    /// Narrows to the imaginary part.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::NotImaginary`] if the real part is non-zero.
    pub fn to_imaginary(&self) -> Result<BigImaginary<T>, ComplexError> {
        if self.real.is_zero() {
            Ok(self.imag.clone())
        } else {
            Err(ComplexError::NotImaginary {
                value: self.to_string(),
            })
        }
    }
}

impl<T: BigRational> fmt::Debug for BigComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigComplex<{}>({self})", T::VARIANT)
    }
}

impl<T: BigRational> fmt::Display for BigComplex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag.value().signum() < 0 {
            write!(f, "{}-{}", self.real, -&self.imag)
        } else {
            write!(f, "{}+{}", self.real, self.imag)
        }
    }
}

impl<T: BigRational> From<T> for BigComplex<T> {
    fn from(real: T) -> Self {
        Self::new(real, BigImaginary::zero())
    }
}

impl<T: BigRational> From<BigImaginary<T>> for BigComplex<T> {
    fn from(imag: BigImaginary<T>) -> Self {
        Self::new(T::zero(), imag)
    }
}

/// `real + imag` and `real - imag` for each concrete rational.
macro_rules! complex_from_parts {
    ($($R:ty),*) => {$(
        /// `a + bi` from its parts.
        impl Add<BigImaginary<$R>> for $R {
            type Output = BigComplex<$R>;

            fn add(self, rhs: BigImaginary<$R>) -> Self::Output {
                BigComplex::new(self, rhs)
            }
        }

        /// `a - bi` from its parts.
        impl Sub<BigImaginary<$R>> for $R {
            type Output = BigComplex<$R>;

            fn sub(self, rhs: BigImaginary<$R>) -> Self::Output {
                BigComplex::new(self, -rhs)
            }
        }
    )*};
}

complex_from_parts!(FixedBigRational, FloatingBigRational);

impl<T: BigRational> Add for BigComplex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl<T: BigRational> Sub for BigComplex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

/// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
impl<T: BigRational> Mul for BigComplex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let real = self.real.clone() * rhs.real.clone() + &self.imag * &rhs.imag;
        let imag = self.imag * rhs.real + rhs.imag * self.real;
        Self::new(real, imag)
    }
}

/// # Panics
///
/// Panics if `rhs` is a fixed zero. Use [`BigComplex::checked_div`] to get
/// the error instead.
impl<T: BigRational> Div for BigComplex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

forward_ref_binop!(impl Add, add for BigComplex<T>, BigComplex<T> => BigComplex<T>);
forward_ref_binop!(impl Sub, sub for BigComplex<T>, BigComplex<T> => BigComplex<T>);
forward_ref_binop!(impl Mul, mul for BigComplex<T>, BigComplex<T> => BigComplex<T>);
forward_ref_binop!(impl Div, div for BigComplex<T>, BigComplex<T> => BigComplex<T>);

impl<T: BigRational> Add<T> for BigComplex<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self::new(self.real + rhs, self.imag)
    }
}

impl<T: BigRational> Add<BigImaginary<T>> for BigComplex<T> {
    type Output = Self;

    fn add(self, rhs: BigImaginary<T>) -> Self::Output {
        Self::new(self.real, self.imag + rhs)
    }
}

impl<T: BigRational> Mul<T> for BigComplex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.real * rhs.clone(), self.imag * rhs)
    }
}

impl<T: BigRational> Neg for BigComplex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imag)
    }
}

impl<T: BigRational> Neg for &BigComplex<T> {
    type Output = BigComplex<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Ring for FixedBigComplex {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Self::is_one(self)
    }
}

impl CommutativeRing for FixedBigComplex {}

impl Field for FixedBigComplex {
    fn inv(&self) -> Option<Self> {
        self.checked_recip().ok()
    }
}
