//! Fixed big rationals: exact values where division by zero is an error.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use quotient_integers::Integer;
use quotient_rings::{CommutativeRing, Field, Ring};
use tracing::debug;

use crate::base::{cmp_finite, fmt_finite, forward_binop, lowest_terms, sealed, BigRational};
use crate::error::RationalError;
use crate::parse;

static ZERO: Lazy<FixedBigRational> = Lazy::new(|| FixedBigRational::from_integer(Integer::zero()));
static ONE: Lazy<FixedBigRational> = Lazy::new(|| FixedBigRational::from_integer(Integer::one()));
static TWO: Lazy<FixedBigRational> = Lazy::new(|| FixedBigRational::from_integer(Integer::new(2)));
static TEN: Lazy<FixedBigRational> = Lazy::new(|| FixedBigRational::from_integer(Integer::new(10)));

/// An exact rational that never leaves the real line.
///
/// The pair is always in lowest terms with a positive denominator, so the
/// derived equality and hash are structural and agree with value equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedBigRational {
    numerator: Integer,
    denominator: Integer,
}

impl FixedBigRational {
    /// Builds `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            debug!(variant = Self::VARIANT, %numerator, "zero denominator");
            return Err(RationalError::DivisionByZero);
        }
        Ok(sealed::Canonical::canonical(numerator, denominator))
    }

    /// Builds `numerator / denominator` from machine integers.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn over(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// 0
    #[must_use]
    pub fn zero() -> Self {
        ZERO.clone()
    }

    /// 1
    #[must_use]
    pub fn one() -> Self {
        ONE.clone()
    }

    /// 2
    #[must_use]
    pub fn two() -> Self {
        TWO.clone()
    }

    /// 10
    #[must_use]
    pub fn ten() -> Self {
        TEN.clone()
    }

    /// Returns true for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true for one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl sealed::Canonical for FixedBigRational {
    fn canonical(numerator: Integer, denominator: Integer) -> Self {
        let (numerator, denominator) = lowest_terms(numerator, denominator);
        Self {
            numerator,
            denominator,
        }
    }
}

impl BigRational for FixedBigRational {
    const VARIANT: &'static str = "fixed";

    fn value_of(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        Self::new(numerator, denominator)
    }

    fn from_integer(value: Integer) -> Self {
        Self {
            numerator: value,
            denominator: Integer::one(),
        }
    }

    fn from_f64(value: f64) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite {
                value: value.to_string(),
            });
        }
        let (numerator, denominator) = parse::float_parts(&value.to_string())?;
        Self::new(numerator, denominator)
    }

    fn from_f32(value: f32) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite {
                value: value.to_string(),
            });
        }
        let (numerator, denominator) = parse::float_parts(&value.to_string())?;
        Self::new(numerator, denominator)
    }

    fn numerator(&self) -> &Integer {
        &self.numerator
    }

    fn denominator(&self) -> &Integer {
        &self.denominator
    }

    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn two() -> Self {
        Self::two()
    }

    fn ten() -> Self {
        Self::ten()
    }

    fn checked_recip(&self) -> Result<Self, RationalError> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl PartialOrd for FixedBigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedBigRational {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_finite(
            (&self.numerator, &self.denominator),
            (&other.numerator, &other.denominator),
        )
    }
}

impl fmt::Debug for FixedBigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBigRational({self})")
    }
}

impl fmt::Display for FixedBigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_finite(&self.numerator, &self.denominator, f)
    }
}

impl FromStr for FixedBigRational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = parse::parse_parts(s)?;
        Self::new(numerator, denominator)
    }
}

impl From<Integer> for FixedBigRational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for FixedBigRational {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

impl Zero for FixedBigRational {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl One for FixedBigRational {
    fn one() -> Self {
        Self::one()
    }
}

impl Ring for FixedBigRational {
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

impl CommutativeRing for FixedBigRational {}

impl Field for FixedBigRational {
    fn inv(&self) -> Option<Self> {
        self.checked_recip().ok()
    }
}

impl Add for &FixedBigRational {
    type Output = FixedBigRational;

    fn add(self, rhs: Self) -> Self::Output {
        sealed::Canonical::canonical(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for &FixedBigRational {
    type Output = FixedBigRational;

    fn sub(self, rhs: Self) -> Self::Output {
        sealed::Canonical::canonical(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for &FixedBigRational {
    type Output = FixedBigRational;

    fn mul(self, rhs: Self) -> Self::Output {
        sealed::Canonical::canonical(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

/// Exact division.
///
/// # Panics
///
/// Panics if `rhs` is zero, as integer division does. Use
/// [`BigRational::checked_div`] to get the error instead.
impl Div for &FixedBigRational {
    type Output = FixedBigRational;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

forward_binop!(impl Add, add for FixedBigRational);
forward_binop!(impl Sub, sub for FixedBigRational);
forward_binop!(impl Mul, mul for FixedBigRational);
forward_binop!(impl Div, div for FixedBigRational);

impl Neg for FixedBigRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &FixedBigRational {
    type Output = FixedBigRational;

    fn neg(self) -> Self::Output {
        FixedBigRational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}
