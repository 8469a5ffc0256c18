//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations the rational types need for canonicalization, rounding
//! and conversion.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision signed integer.
///
/// This is the substrate every other value in the tower is built on:
/// rationals store a pair of these, modular values reduce from them.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns `10^exp`.
    #[must_use]
    pub fn power_of_ten(exp: u32) -> Self {
        Self::new(10).pow(exp)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        DashuSigned::is_positive(&self.0)
    }

    /// Computes the greatest common divisor of the absolute values.
    ///
    /// `gcd(0, 0)` is 0.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the least common multiple of the absolute values.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        Self(&self.0 / &g.0 * &other.0).abs()
    }

    /// Division rounding towards negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_floor(&self, divisor: &Self) -> Self {
        let quotient = self / divisor;
        let remainder = self % divisor;
        if !remainder.is_zero() && remainder.is_negative() != divisor.is_negative() {
            quotient - Self::one()
        } else {
            quotient
        }
    }

    /// Remainder of floored division: always has the sign of `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn rem_floor(&self, divisor: &Self) -> Self {
        let remainder = self % divisor;
        if !remainder.is_zero() && remainder.is_negative() != divisor.is_negative() {
            remainder + divisor
        } else {
            remainder
        }
    }

    /// Returns `floor(sqrt(self))` for a non-negative integer, or `None`
    /// when `self` is negative.
    #[must_use]
    pub fn isqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if *self < Self::new(2) {
            return Some(self.clone());
        }

        // Newton iteration from above converges monotonically.
        let two = Self::new(2);
        let mut x = self.clone();
        let mut y = (&x + &(self / &x)) / two.clone();
        while y < x {
            x = y;
            y = (&x + &(self / &x)) / two.clone();
        }
        Some(x)
    }

    /// Returns the exact square root when `self` is a perfect square.
    #[must_use]
    pub fn exact_sqrt(&self) -> Option<Self> {
        let root = self.isqrt()?;
        if &root * &root == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Returns the integer cube root, rounded towards zero.
    ///
    /// Unlike square roots, negative values have real cube roots:
    /// `icbrt(-27)` is -3.
    #[must_use]
    pub fn icbrt(&self) -> Self {
        if self.is_negative() {
            return -(-self).icbrt();
        }
        if *self < Self::new(2) {
            return self.clone();
        }

        // Start from a power of two at or above the root.
        let bits = self.0.clone().unsigned_abs().bit_len();
        let exp = u32::try_from((bits + 2) / 3).unwrap_or(u32::MAX);
        let three = Self::new(3);
        let step = |x: &Self| (x * &Self::new(2) + self / &(x * x)) / three.clone();

        let mut x = Self::new(2).pow(exp);
        let mut y = step(&x);
        while y < x {
            x = y;
            y = step(&x);
        }
        x
    }

    /// Returns the exact cube root when `self` is a perfect cube.
    #[must_use]
    pub fn exact_cbrt(&self) -> Option<Self> {
        let root = self.icbrt();
        if &(&root * &root) * &root == *self {
            Some(root)
        } else {
            None
        }
    }

    /// Returns true if `|self|` is a power of `base` (including `base^0 = 1`).
    ///
    /// Zero is not a power of anything; bases below 2 only admit 1.
    #[must_use]
    pub fn is_power_of(&self, base: u64) -> bool {
        let mut n = self.abs();
        if n.is_zero() {
            return false;
        }
        if base < 2 {
            return n.is_one();
        }
        let base = Self::from(base);
        while !n.is_one() {
            if !(&n % &base).is_zero() {
                return false;
            }
            n = n / base.clone();
        }
        true
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value is negative or doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    ///
    /// `0^0` is 1.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implements `Integer op Integer`, `Integer op &Integer` and
/// `&Integer op &Integer` by delegating to `dashu`.
macro_rules! integer_binop {
    ($(#[$doc:meta])* impl $Op:ident, $op:ident) => {
        $(#[$doc])*
        impl $Op for Integer {
            type Output = Integer;

            fn $op(self, rhs: Integer) -> Integer {
                Integer($Op::$op(self.0, rhs.0))
            }
        }

        impl $Op<&Integer> for Integer {
            type Output = Integer;

            fn $op(self, rhs: &Integer) -> Integer {
                Integer($Op::$op(self.0, &rhs.0))
            }
        }

        impl $Op for &Integer {
            type Output = Integer;

            fn $op(self, rhs: &Integer) -> Integer {
                Integer($Op::$op(&self.0, &rhs.0))
            }
        }
    };
}

integer_binop!(impl Add, add);
integer_binop!(impl Sub, sub);
integer_binop!(impl Mul, mul);
integer_binop!(
    /// Truncating division, as for the primitive integers.
    impl Div, div
);
integer_binop!(
    /// Truncating remainder: takes the sign of the dividend.
    impl Rem, rem
);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
