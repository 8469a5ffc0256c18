//! Floating big rationals: the extended line with signed infinities and NaN.
//!
//! A zero denominator never fails here. `n/0` is positive infinity for
//! `n > 0`, negative infinity for `n < 0`, and NaN for `0/0`. Each special
//! exists exactly once per process, so [`FloatingBigRational::is_identical`]
//! can tell the canonical NaN apart even though NaN is never equal to
//! anything under `==`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use std::sync::Arc;

use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use quotient_integers::Integer;

use crate::base::{cmp_finite, fmt_finite, forward_binop, lowest_terms, sealed, BigRational};
use crate::error::RationalError;
use crate::parse;

static NAN: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::special(0));
static POSITIVE_INFINITY: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::special(1));
static NEGATIVE_INFINITY: Lazy<FloatingBigRational> =
    Lazy::new(|| FloatingBigRational::special(-1));

static ZERO: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::from_integer(Integer::zero()));
static ONE: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::from_integer(Integer::one()));
static TWO: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::from_integer(Integer::new(2)));
static TEN: Lazy<FloatingBigRational> = Lazy::new(|| FloatingBigRational::from_integer(Integer::new(10)));

#[derive(Debug)]
struct Parts {
    numerator: Integer,
    denominator: Integer,
}

/// A rational on the extended number line.
///
/// Values are shared immutably; cloning is a reference-count bump.
#[derive(Clone)]
pub struct FloatingBigRational(Arc<Parts>);

impl FloatingBigRational {
    fn from_parts(numerator: Integer, denominator: Integer) -> Self {
        Self(Arc::new(Parts {
            numerator,
            denominator,
        }))
    }

    fn special(sign: i64) -> Self {
        Self::from_parts(Integer::new(sign), Integer::zero())
    }

    /// Builds `numerator / denominator`, mapping a zero denominator to the
    /// matching special value.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        sealed::Canonical::canonical(numerator, denominator)
    }

    /// Builds `numerator / denominator` from machine integers.
    #[must_use]
    pub fn over(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// The canonical NaN.
    #[must_use]
    pub fn nan() -> Self {
        NAN.clone()
    }

    /// The canonical positive infinity.
    #[must_use]
    pub fn positive_infinity() -> Self {
        POSITIVE_INFINITY.clone()
    }

    /// The canonical negative infinity.
    #[must_use]
    pub fn negative_infinity() -> Self {
        NEGATIVE_INFINITY.clone()
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

    /// Returns true for a finite zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        BigRational::is_zero(self)
    }

    /// Returns true for one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.numerator.is_one() && self.0.denominator.is_one()
    }

    /// Returns true for either infinity.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.0.denominator.is_zero() && !self.0.numerator.is_zero()
    }

    /// Returns true for positive infinity.
    #[must_use]
    pub fn is_positive_infinity(&self) -> bool {
        self.is_infinite() && self.0.numerator.is_positive()
    }

    /// Returns true for negative infinity.
    #[must_use]
    pub fn is_negative_infinity(&self) -> bool {
        self.is_infinite() && self.0.numerator.is_negative()
    }

    /// Returns true when both handles point at the same instance.
    ///
    /// This is reference identity, not value equality: the canonical NaN
    /// is identical to itself yet never `==` to itself.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The multiplicative inverse: `1/0` is positive infinity and the
    /// infinities invert to zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        if self.is_nan() {
            Self::nan()
        } else if self.is_infinite() {
            Self::zero()
        } else if BigRational::is_zero(self) {
            Self::positive_infinity()
        } else {
            Self::new(self.0.denominator.clone(), self.0.numerator.clone())
        }
    }

    fn rank(&self) -> u8 {
        if self.is_nan() {
            3
        } else if self.is_positive_infinity() {
            2
        } else if self.is_negative_infinity() {
            0
        } else {
            1
        }
    }
}

impl sealed::Canonical for FloatingBigRational {
    fn canonical(numerator: Integer, denominator: Integer) -> Self {
        if denominator.is_zero() {
            return match numerator.signum() {
                0 => Self::nan(),
                1 => Self::positive_infinity(),
                _ => Self::negative_infinity(),
            };
        }
        let (numerator, denominator) = lowest_terms(numerator, denominator);
        Self::from_parts(numerator, denominator)
    }
}

impl BigRational for FloatingBigRational {
    const VARIANT: &'static str = "floating";

    fn value_of(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        Ok(Self::new(numerator, denominator))
    }

    fn from_integer(value: Integer) -> Self {
        Self::from_parts(value, Integer::one())
    }

    fn from_f64(value: f64) -> Result<Self, RationalError> {
        if value.is_nan() {
            Ok(Self::nan())
        } else if value.is_infinite() {
            Ok(if value > 0.0 {
                Self::positive_infinity()
            } else {
                Self::negative_infinity()
            })
        } else {
            let (numerator, denominator) = parse::float_parts(&value.to_string())?;
            Ok(Self::new(numerator, denominator))
        }
    }

    fn from_f32(value: f32) -> Result<Self, RationalError> {
        if value.is_nan() {
            Ok(Self::nan())
        } else if value.is_infinite() {
            Ok(if value > 0.0 {
                Self::positive_infinity()
            } else {
                Self::negative_infinity()
            })
        } else {
            let (numerator, denominator) = parse::float_parts(&value.to_string())?;
            Ok(Self::new(numerator, denominator))
        }
    }

    fn numerator(&self) -> &Integer {
        &self.0.numerator
    }

    fn denominator(&self) -> &Integer {
        &self.0.denominator
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
        Ok(self.recip())
    }

    /// Orders `-Infinity < finite < Infinity < NaN`, with every NaN equal.
    fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (1, 1) => cmp_finite(
                (&self.0.numerator, &self.0.denominator),
                (&other.0.numerator, &other.0.denominator),
            ),
            (a, b) => a.cmp(&b),
        }
    }
}

impl PartialEq for FloatingBigRational {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.0.numerator == other.0.numerator && self.0.denominator == other.0.denominator
    }
}

impl PartialOrd for FloatingBigRational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            None
        } else {
            Some(self.total_cmp(other))
        }
    }
}

impl fmt::Debug for FloatingBigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatingBigRational({self})")
    }
}

impl fmt::Display for FloatingBigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            3 => f.write_str("NaN"),
            2 => f.write_str("Infinity"),
            0 => f.write_str("-Infinity"),
            _ => fmt_finite(&self.0.numerator, &self.0.denominator, f),
        }
    }
}

impl FromStr for FloatingBigRational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NaN" => Ok(Self::nan()),
            "Infinity" | "+Infinity" => Ok(Self::positive_infinity()),
            "-Infinity" => Ok(Self::negative_infinity()),
            text => {
                let (numerator, denominator) = parse::parse_parts(text)?;
                Ok(Self::new(numerator, denominator))
            }
        }
    }
}

impl From<Integer> for FloatingBigRational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for FloatingBigRational {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

impl From<f64> for FloatingBigRational {
    fn from(value: f64) -> Self {
        // Finite renderings always parse, so the fallback is never taken.
        Self::from_f64(value).unwrap_or_else(|_| Self::nan())
    }
}

impl From<f32> for FloatingBigRational {
    fn from(value: f32) -> Self {
        Self::from_f32(value).unwrap_or_else(|_| Self::nan())
    }
}

impl Zero for FloatingBigRational {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl One for FloatingBigRational {
    fn one() -> Self {
        Self::one()
    }
}

impl Add for &FloatingBigRational {
    type Output = FloatingBigRational;

    fn add(self, rhs: Self) -> Self::Output {
        if self.is_nan() || rhs.is_nan() {
            return FloatingBigRational::nan();
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) if self.signum() == rhs.signum() => self.clone(),
            (true, true) => FloatingBigRational::nan(),
            (true, false) => self.clone(),
            (false, true) => rhs.clone(),
            (false, false) => FloatingBigRational::new(
                &self.0.numerator * &rhs.0.denominator + &rhs.0.numerator * &self.0.denominator,
                &self.0.denominator * &rhs.0.denominator,
            ),
        }
    }
}

impl Sub for &FloatingBigRational {
    type Output = FloatingBigRational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &-rhs
    }
}

impl Mul for &FloatingBigRational {
    type Output = FloatingBigRational;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_nan() || rhs.is_nan() {
            return FloatingBigRational::nan();
        }
        if self.is_infinite() || rhs.is_infinite() {
            // Zero times infinity has no sign to take.
            return match self.signum() * rhs.signum() {
                0 => FloatingBigRational::nan(),
                1 => FloatingBigRational::positive_infinity(),
                _ => FloatingBigRational::negative_infinity(),
            };
        }
        FloatingBigRational::new(
            &self.0.numerator * &rhs.0.numerator,
            &self.0.denominator * &rhs.0.denominator,
        )
    }
}

/// Multiplication by the reciprocal, so `x/0` is an infinity or NaN.
impl Div for &FloatingBigRational {
    type Output = FloatingBigRational;

    fn div(self, rhs: Self) -> Self::Output {
        self * &rhs.recip()
    }
}

forward_binop!(impl Add, add for FloatingBigRational);
forward_binop!(impl Sub, sub for FloatingBigRational);
forward_binop!(impl Mul, mul for FloatingBigRational);
forward_binop!(impl Div, div for FloatingBigRational);

impl Neg for &FloatingBigRational {
    type Output = FloatingBigRational;

    fn neg(self) -> Self::Output {
        match self.rank() {
            3 => FloatingBigRational::nan(),
            2 => FloatingBigRational::negative_infinity(),
            0 => FloatingBigRational::positive_infinity(),
            _ => FloatingBigRational::from_parts(-&self.0.numerator, self.0.denominator.clone()),
        }
    }
}

impl Neg for FloatingBigRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F = FloatingBigRational;

    #[test]
    fn test_zero_denominator_sign_rule() {
        assert!(F::over(4, 0).is_identical(&F::positive_infinity()));
        assert!(F::over(-4, 0).is_identical(&F::negative_infinity()));
        assert!(F::over(0, 0).is_identical(&F::nan()));
        assert!(F::over(0, 0).is_nan());
    }

    #[test]
    fn test_nan_identity_is_not_equality() {
        let nan = F::nan();
        assert!(nan.is_identical(&nan));
        assert!(!nan.eq(&nan.clone()));
        assert_ne!(F::nan(), F::over(0, 0));
        assert_ne!(F::nan(), F::zero());
        assert_eq!(F::nan().partial_cmp(&F::one()), None);
    }

    #[test]
    fn test_infinities_equal_themselves() {
        assert_eq!(F::positive_infinity(), F::over(7, 0));
        assert_eq!(F::negative_infinity(), F::over(-1, 0));
        assert_ne!(F::positive_infinity(), F::negative_infinity());
        assert!(F::negative_infinity() < F::over(-1_000_000, 1));
    }

    #[test]
    fn test_total_order_for_sort() {
        let mut values = vec![
            F::positive_infinity(),
            F::nan(),
            F::zero(),
            F::positive_infinity(),
            F::nan(),
            F::negative_infinity(),
            F::zero(),
            F::negative_infinity(),
        ];
        values.sort_by(BigRational::total_cmp);

        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["-Infinity", "-Infinity", "0", "0", "Infinity", "Infinity", "NaN", "NaN"]
        );
        assert!(values[6].is_identical(&F::nan()));
    }

    #[test]
    fn test_extended_addition() {
        let inf = F::positive_infinity();
        let ninf = F::negative_infinity();
        assert_eq!(&inf + &F::one(), inf);
        assert_eq!(&F::one() + &ninf, ninf);
        assert_eq!(&inf + &inf, inf);
        assert!((&inf + &ninf).is_nan());
        assert!((&inf - &inf).is_nan());
        assert!((&F::nan() + &F::one()).is_nan());
        assert_eq!(F::over(1, 2) + F::over(1, 3), F::over(5, 6));
    }

    #[test]
    fn test_extended_multiplication() {
        let inf = F::positive_infinity();
        let ninf = F::negative_infinity();
        assert_eq!(&inf * &F::over(-2, 3), ninf);
        assert_eq!(&ninf * &ninf, inf);
        assert!((&inf * &F::zero()).is_nan());
        assert!((&F::nan() * &F::zero()).is_nan());
    }

    #[test]
    fn test_extended_division() {
        assert_eq!(F::one() / F::zero(), F::positive_infinity());
        assert_eq!(F::over(-1, 1) / F::zero(), F::negative_infinity());
        assert!((F::zero() / F::zero()).is_nan());
        assert_eq!(F::one() / F::positive_infinity(), F::zero());
        assert!((F::positive_infinity() / F::positive_infinity()).is_nan());
        assert_eq!(F::over(1, 2) / F::over(1, 4), F::two());
    }

    #[test]
    fn test_negation() {
        assert!((-F::nan()).is_nan());
        assert!((-F::positive_infinity()).is_identical(&F::negative_infinity()));
        assert_eq!(-F::over(1, 2), F::over(-1, 2));
    }

    #[test]
    fn test_powers_follow_ieee() {
        assert_eq!(F::nan().powi(0).unwrap(), F::one());
        assert_eq!(F::positive_infinity().powi(0).unwrap(), F::one());
        assert_eq!(F::negative_infinity().powi(3).unwrap(), F::negative_infinity());
        assert_eq!(F::negative_infinity().powi(2).unwrap(), F::positive_infinity());
        assert_eq!(F::zero().powi(-1).unwrap(), F::positive_infinity());
        assert_eq!(F::positive_infinity().powi(-1).unwrap(), F::zero());
        assert!(F::nan().powi(2).unwrap().is_nan());
    }

    #[test]
    fn test_specials_round_to_themselves() {
        assert!(F::nan().floor().is_nan());
        assert!(F::positive_infinity().ceil().is_identical(&F::positive_infinity()));
        assert!(F::negative_infinity().round().is_identical(&F::negative_infinity()));
        assert!(F::nan().truncate_to_integer().is_err());
        assert!(!F::nan().is_integer());
        assert!(!F::positive_infinity().is_dyadic());
        assert!(!F::nan().is_dyadic());
    }

    #[test]
    fn test_specials_in_supplementary_functions() {
        let (truncation, fraction) = F::positive_infinity().truncate_and_fraction();
        assert!(truncation.is_identical(&F::positive_infinity()));
        assert!(fraction.is_nan());
        assert!(F::nan().fraction().is_nan());
        assert!(F::negative_infinity().round_out().is_identical(&F::negative_infinity()));
        assert!(F::nan().sqrt().unwrap().is_nan());
        assert!(F::over(-2, 1).sqrt_approximated().unwrap().is_nan());
        assert_eq!(F::over(-2, 1).cbrt_approximated().unwrap().to_f64(), (-2.0_f64).cbrt());
        assert!(F::nan().sqrt_and_remainder().is_err());
    }

    #[test]
    fn test_signum() {
        assert_eq!(F::nan().signum(), 0);
        assert_eq!(F::negative_infinity().signum(), -1);
        assert_eq!(F::over(3, 4).signum(), 1);
        assert!(F::negative_infinity().abs().is_identical(&F::positive_infinity()));
    }

    #[test]
    fn test_parse_and_display() {
        for text in ["NaN", "Infinity", "-Infinity", "0", "-3/2", "7"] {
            assert_eq!(text.parse::<F>().unwrap().to_string(), text);
        }
        assert!("+Infinity".parse::<F>().unwrap().is_identical(&F::positive_infinity()));
        assert!("0/0".parse::<F>().unwrap().is_identical(&F::nan()));
        assert_eq!("2.50".parse::<F>().unwrap(), F::over(5, 2));
    }

    #[test]
    fn test_native_floats() {
        assert!(F::from(f64::NAN).is_identical(&F::nan()));
        assert!(F::from(f64::NEG_INFINITY).is_identical(&F::negative_infinity()));
        assert!(F::from(f32::INFINITY).is_identical(&F::positive_infinity()));
        assert_eq!(F::from(123.456_f64), F::over(15_432, 125));
        assert!(F::nan().to_f64().is_nan());
        assert_eq!(F::positive_infinity().to_f64(), f64::INFINITY);
        assert_eq!(F::negative_infinity().to_f32(), f32::NEG_INFINITY);
        assert_eq!(F::over(1, 10).to_f64(), 0.1);
    }
}
