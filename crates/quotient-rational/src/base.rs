//! The contract shared by both rational variants.
//!
//! Fixed and floating rationals store the same canonical pair and agree on
//! everything except what a zero denominator means. The operations that do
//! not depend on that choice are provided here once, in terms of the
//! variant's own constructors and operators.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::UnsignedAbs;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use quotient_integers::Integer;

use crate::error::RationalError;

pub(crate) mod sealed {
    use quotient_integers::Integer;

    /// Construction from a pair the crate already knows to be valid.
    pub trait Canonical: Sized {
        /// Reduces `numerator / denominator` to canonical form.
        ///
        /// Fixed rationals are only ever handed non-zero denominators here.
        fn canonical(numerator: Integer, denominator: Integer) -> Self;
    }
}

/// Reduces a pair with a non-zero denominator to lowest terms with a
/// positive denominator.
pub(crate) fn lowest_terms(numerator: Integer, denominator: Integer) -> (Integer, Integer) {
    debug_assert!(!denominator.is_zero(), "lowest_terms needs a denominator");

    let (numerator, denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };

    let divisor = numerator.gcd(&denominator);
    if divisor.is_one() {
        (numerator, denominator)
    } else {
        (numerator / &divisor, denominator / &divisor)
    }
}

/// Renders a finite canonical pair: integers bare, everything else `n/d`.
pub(crate) fn fmt_finite(
    numerator: &Integer,
    denominator: &Integer,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if denominator.is_one() {
        write!(f, "{numerator}")
    } else {
        write!(f, "{numerator}/{denominator}")
    }
}

/// Compares two finite canonical pairs by cross-multiplication.
pub(crate) fn cmp_finite(a: (&Integer, &Integer), b: (&Integer, &Integer)) -> Ordering {
    (a.0 * b.1).cmp(&(b.0 * a.1))
}

/// Exact ratio of a finite pair as a `dashu` rational.
fn to_rbig(numerator: &Integer, denominator: &Integer) -> RBig {
    RBig::from_parts(
        numerator.as_inner().clone(),
        denominator.as_inner().clone().unsigned_abs(),
    )
}

/// Implements the owned forms of a binary operator in terms of the
/// borrowed `&T op &T` form.
macro_rules! forward_binop {
    (impl $Op:ident, $op:ident for $T:ty) => {
        impl $Op for $T {
            type Output = $T;

            fn $op(self, rhs: $T) -> $T {
                (&self).$op(&rhs)
            }
        }

        impl $Op<&$T> for $T {
            type Output = $T;

            fn $op(self, rhs: &$T) -> $T {
                (&self).$op(rhs)
            }
        }
    };
}

pub(crate) use forward_binop;

/// An exact big rational: a numerator and denominator kept in lowest terms.
///
/// Implemented by [`FixedBigRational`](crate::FixedBigRational), where a zero
/// denominator is an error, and by
/// [`FloatingBigRational`](crate::FloatingBigRational), where it encodes NaN
/// or a signed infinity.
pub trait BigRational:
    sealed::Canonical
    + Clone
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = RationalError>
    + From<i64>
    + From<Integer>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Short variant name used in diagnostics.
    const VARIANT: &'static str;

    /// Builds `numerator / denominator` in canonical form.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::DivisionByZero`] for a zero
    /// denominator. Floating rationals never fail.
    fn value_of(numerator: Integer, denominator: Integer) -> Result<Self, RationalError>;

    /// Builds the rational `value / 1`.
    fn from_integer(value: Integer) -> Self;

    /// Converts a native double exactly from its shortest decimal rendering.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::NonFinite`] for NaN and the
    /// infinities.
    fn from_f64(value: f64) -> Result<Self, RationalError>;

    /// Converts a native float exactly from its shortest decimal rendering.
    ///
    /// # Errors
    ///
    /// As for [`BigRational::from_f64`].
    fn from_f32(value: f32) -> Result<Self, RationalError>;

    /// The canonical numerator.
    fn numerator(&self) -> &Integer;

    /// The canonical denominator, zero only for floating specials.
    fn denominator(&self) -> &Integer;

    /// 0
    fn zero() -> Self;

    /// 1
    fn one() -> Self;

    /// 2
    fn two() -> Self;

    /// 10
    fn ten() -> Self;

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::DivisionByZero`] for zero.
    fn checked_recip(&self) -> Result<Self, RationalError>;

    /// An order total over every value of the variant, NaN included.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Divides by `other`.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::DivisionByZero`] when `other`
    /// is zero.
    fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        Ok(self.clone() * other.checked_recip()?)
    }

    /// Returns true for the floating NaN.
    fn is_nan(&self) -> bool {
        self.denominator().is_zero() && self.numerator().is_zero()
    }

    /// Returns true unless this is a floating special.
    fn is_finite(&self) -> bool {
        !self.denominator().is_zero()
    }

    /// Returns true if this is a finite zero.
    fn is_zero(&self) -> bool {
        self.is_finite() && self.numerator().is_zero()
    }

    /// Returns the sign: -1, 0, or 1. NaN has sign 0.
    fn signum(&self) -> i8 {
        self.numerator().signum()
    }

    /// Returns the absolute value.
    #[must_use]
    fn abs(&self) -> Self {
        if self.signum() < 0 {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Returns true for one.
    fn is_one(&self) -> bool {
        self.numerator().is_one() && self.denominator().is_one()
    }

    /// Returns true for finite values with denominator 1.
    fn is_integer(&self) -> bool {
        self.denominator().is_one()
    }

    /// Returns true for finite values whose denominator is a power of two.
    fn is_dyadic(&self) -> bool {
        self.is_p_adic(2)
    }

    /// Returns true for finite values whose denominator is a power of `p`.
    fn is_p_adic(&self, p: u64) -> bool {
        self.is_finite() && self.denominator().is_power_of(p)
    }

    /// Returns the value as an integer when it is one.
    fn to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator().clone())
    }

    /// Drops the fractional part, rounding towards zero.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for floating specials.
    fn truncate_to_integer(&self) -> Result<Integer, RationalError> {
        if self.is_finite() {
            Ok(self.numerator() / self.denominator())
        } else {
            Err(RationalError::NonFinite {
                value: self.to_string(),
            })
        }
    }

    /// The greatest integer not above this value. Specials floor to themselves.
    #[must_use]
    fn floor(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        Self::from_integer(self.numerator().div_floor(self.denominator()))
    }

    /// The least integer not below this value. Specials ceil to themselves.
    #[must_use]
    fn ceil(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        let negated = -self.numerator();
        Self::from_integer(-negated.div_floor(self.denominator()))
    }

    /// Rounds towards zero. Specials truncate to themselves.
    #[must_use]
    fn truncate(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        Self::from_integer(self.numerator() / self.denominator())
    }

    /// Rounds to the nearest integer, ties to even.
    #[must_use]
    fn round(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }

        let (numerator, denominator) = (self.numerator(), self.denominator());
        let floor = numerator.div_floor(denominator);
        let twice_remainder = numerator.rem_floor(denominator) * Integer::new(2);

        let rounded = match twice_remainder.cmp(denominator) {
            Ordering::Less => floor,
            Ordering::Greater => floor + Integer::one(),
            Ordering::Equal => {
                if floor.rem_floor(&Integer::new(2)).is_zero() {
                    floor
                } else {
                    floor + Integer::one()
                }
            }
        };
        Self::from_integer(rounded)
    }

    /// Rounds to the nearest integer in the direction of `goal`; a value
    /// equal to `goal` is returned unchanged.
    #[must_use]
    fn round_towards(&self, goal: &Self) -> Self {
        match goal.total_cmp(self) {
            Ordering::Equal => self.clone(),
            Ordering::Less => self.floor(),
            Ordering::Greater => self.ceil(),
        }
    }

    /// Rounds towards zero, as MATLAB's `fix` does.
    #[must_use]
    fn round_in(&self) -> Self {
        self.round_towards(&Self::zero())
    }

    /// Rounds away from zero, towards the nearer infinity. Zero stays zero.
    #[must_use]
    fn round_out(&self) -> Self {
        if self.signum() > 0 {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// The truncation towards zero and the signed fraction left over.
    ///
    /// The two sum back to `self` for finite values. For the floating
    /// specials the fraction is NaN.
    fn truncate_and_fraction(&self) -> (Self, Self) {
        let truncation = self.truncate();
        let fraction = self.clone() - truncation.clone();
        (truncation, fraction)
    }

    /// The signed fraction after truncation towards zero.
    #[must_use]
    fn fraction(&self) -> Self {
        self.truncate_and_fraction().1
    }

    /// Raises to an integer power, negative exponents through the reciprocal.
    ///
    /// `x^0` is one for every `x`.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::DivisionByZero`] for a
    /// negative power of zero.
    fn powi(&self, exponent: i32) -> Result<Self, RationalError> {
        let mut base = if exponent < 0 {
            self.checked_recip()?
        } else {
            self.clone()
        };
        let mut remaining = exponent.unsigned_abs();
        let mut result = Self::one();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.clone() * base;
            }
        }

        Ok(result)
    }

    /// The mediant `(a + c) / (b + d)` of `a/b` and `c/d`.
    #[must_use]
    fn mediant(&self, other: &Self) -> Self {
        Self::canonical(
            self.numerator() + other.numerator(),
            self.denominator() + other.denominator(),
        )
    }

    /// The greatest common divisor `gcd(a, c) / lcm(b, d)` of `a/b` and
    /// `c/d`. `gcd(0, x)` is `x`.
    #[must_use]
    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        Self::canonical(
            self.numerator().gcd(other.numerator()),
            self.denominator().lcm(other.denominator()),
        )
    }

    /// The least common multiple `lcm(a, c) / gcd(b, d)` of `a/b` and
    /// `c/d`. `lcm(0, x)` is zero.
    #[must_use]
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::canonical(
            self.numerator().lcm(other.numerator()),
            self.denominator().gcd(other.denominator()),
        )
    }

    /// The exact non-negative square root.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NoExactRoot`] when the numerator or the
    /// denominator is not a perfect square, negative values included.
    fn sqrt(&self) -> Result<Self, RationalError> {
        let no_root = || RationalError::NoExactRoot {
            value: self.to_string(),
        };
        let numerator = self.numerator().exact_sqrt().ok_or_else(no_root)?;
        let denominator = self.denominator().exact_sqrt().ok_or_else(no_root)?;
        Ok(Self::canonical(numerator, denominator))
    }

    /// The largest root of the form `isqrt(n)/isqrt(d)` (stepped down once
    /// when that overshoots) and the remainder `self - root * root`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NoExactRoot`] for negative values and
    /// [`RationalError::NonFinite`] for the floating specials.
    fn sqrt_and_remainder(&self) -> Result<(Self, Self), RationalError> {
        if !self.is_finite() {
            return Err(RationalError::NonFinite {
                value: self.to_string(),
            });
        }
        let no_root = || RationalError::NoExactRoot {
            value: self.to_string(),
        };
        let numerator = self.numerator().isqrt().ok_or_else(no_root)?;
        let denominator = self.denominator().isqrt().ok_or_else(no_root)?;

        let root = Self::canonical(numerator, denominator);
        let square = root.clone() * root.clone();
        if self.total_cmp(&square) != Ordering::Less {
            return Ok((root, self.clone() - square));
        }

        let root = Self::canonical(
            root.numerator() - &Integer::one(),
            root.denominator().clone(),
        );
        let remainder = self.clone() - root.clone() * root.clone();
        Ok((root, remainder))
    }

    /// The exact square root, or else the nearest rational to the double
    /// precision square root.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::NonFinite`] when the double
    /// root is not finite, as for negative values. Floating rationals
    /// return NaN instead.
    fn sqrt_approximated(&self) -> Result<Self, RationalError> {
        match self.sqrt() {
            Ok(root) => Ok(root),
            Err(_) => Self::from_f64(self.to_f64().sqrt()),
        }
    }

    /// The exact cube root, negative values included.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NoExactRoot`] when the numerator or the
    /// denominator is not a perfect cube.
    fn cbrt(&self) -> Result<Self, RationalError> {
        let no_root = || RationalError::NoExactRoot {
            value: self.to_string(),
        };
        let numerator = self.numerator().exact_cbrt().ok_or_else(no_root)?;
        let denominator = self.denominator().exact_cbrt().ok_or_else(no_root)?;
        Ok(Self::canonical(numerator, denominator))
    }

    /// The exact cube root, or else the nearest rational to the double
    /// precision cube root.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::NonFinite`] when the value is
    /// too large for a double.
    fn cbrt_approximated(&self) -> Result<Self, RationalError> {
        match self.cbrt() {
            Ok(root) => Ok(root),
            Err(_) => Self::from_f64(self.to_f64().cbrt()),
        }
    }

    /// Truncated quotient and the remainder `self - quotient * other`.
    ///
    /// # Errors
    ///
    /// Fixed rationals return [`RationalError::DivisionByZero`] when `other`
    /// is zero.
    fn divide_and_remainder(&self, other: &Self) -> Result<(Self, Self), RationalError> {
        let quotient = self.checked_div(other)?.truncate();
        let remainder = self.clone() - quotient.clone() * other.clone();
        Ok((quotient, remainder))
    }

    /// Nearest double, ties to even.
    fn to_f64(&self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else if !self.is_finite() {
            f64::INFINITY.copysign(f64::from(self.signum()))
        } else {
            to_rbig(self.numerator(), self.denominator()).to_f64().value()
        }
    }

    /// Nearest float, ties to even, rounded once from the exact ratio.
    fn to_f32(&self) -> f32 {
        if self.is_nan() {
            f32::NAN
        } else if !self.is_finite() {
            f32::INFINITY.copysign(f32::from(self.signum()))
        } else {
            to_rbig(self.numerator(), self.denominator()).to_f32().value()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Integer {
        Integer::new(n)
    }

    #[test]
    fn test_lowest_terms() {
        assert_eq!(lowest_terms(int(6), int(-4)), (int(-3), int(2)));
        assert_eq!(lowest_terms(int(0), int(-7)), (int(0), int(1)));
        assert_eq!(lowest_terms(int(-5), int(5)), (int(-1), int(1)));
        assert_eq!(lowest_terms(int(3), int(7)), (int(3), int(7)));
    }

    #[test]
    fn test_cmp_finite() {
        assert_eq!(cmp_finite((&int(1), &int(3)), (&int(1), &int(2))), Ordering::Less);
        assert_eq!(cmp_finite((&int(-1), &int(2)), (&int(-1), &int(3))), Ordering::Less);
        assert_eq!(cmp_finite((&int(2), &int(4)), (&int(1), &int(2))), Ordering::Equal);
    }
}
