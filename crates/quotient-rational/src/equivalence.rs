//! Conversions and equivalence between the two rational variants.

use crate::base::{sealed::Canonical, BigRational};
use crate::error::RationalError;
use crate::fixed::FixedBigRational;
use crate::floating::FloatingBigRational;

/// Returns true when both values denote the same finite rational.
///
/// The floating specials are never equivalent to anything.
#[must_use]
pub fn equivalent(fixed: &FixedBigRational, floating: &FloatingBigRational) -> bool {
    floating.is_finite()
        && fixed.numerator() == floating.numerator()
        && fixed.denominator() == floating.denominator()
}

impl From<&FixedBigRational> for FloatingBigRational {
    fn from(value: &FixedBigRational) -> Self {
        Self::canonical(value.numerator().clone(), value.denominator().clone())
    }
}

impl From<FixedBigRational> for FloatingBigRational {
    fn from(value: FixedBigRational) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<&FloatingBigRational> for FixedBigRational {
    type Error = RationalError;

    fn try_from(value: &FloatingBigRational) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite {
                value: value.to_string(),
            });
        }
        Self::new(value.numerator().clone(), value.denominator().clone())
    }
}

impl TryFrom<FloatingBigRational> for FixedBigRational {
    type Error = RationalError;

    fn try_from(value: FloatingBigRational) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotient_integers::Integer;

    #[test]
    fn test_equivalent_constants() {
        assert!(equivalent(&FixedBigRational::one(), &FloatingBigRational::one()));
        assert!(equivalent(&FixedBigRational::zero(), &FloatingBigRational::zero()));
        assert!(equivalent(
            &FixedBigRational::over(-6, 4).unwrap(),
            &FloatingBigRational::over(3, -2)
        ));
        assert!(!equivalent(&FixedBigRational::one(), &FloatingBigRational::two()));
    }

    #[test]
    fn test_specials_are_never_equivalent() {
        for special in [
            FloatingBigRational::nan(),
            FloatingBigRational::positive_infinity(),
            FloatingBigRational::negative_infinity(),
        ] {
            assert!(!equivalent(&FixedBigRational::zero(), &special));
            assert!(!equivalent(&FixedBigRational::one(), &special));
            assert!(!equivalent(&FixedBigRational::over(-1, 1).unwrap(), &special));
        }
    }

    fn half_of<T: BigRational>() -> T {
        T::value_of(Integer::new(-3), Integer::new(-6)).unwrap()
    }

    #[test]
    fn test_value_of_agrees_across_variants() {
        let fixed: FixedBigRational = half_of();
        let floating: FloatingBigRational = half_of();
        assert!(equivalent(&fixed, &floating));
        assert_eq!(fixed.to_string(), "1/2");
        assert_eq!(
            FixedBigRational::value_of(Integer::new(1), Integer::new(0)),
            Err(RationalError::DivisionByZero)
        );
        assert!(FloatingBigRational::value_of(Integer::new(1), Integer::new(0))
            .unwrap()
            .is_identical(&FloatingBigRational::positive_infinity()));
    }

    #[test]
    fn test_conversions() {
        let fixed = FixedBigRational::over(5, 7).unwrap();
        let floating = FloatingBigRational::from(&fixed);
        assert!(equivalent(&fixed, &floating));
        assert_eq!(FixedBigRational::try_from(&floating).unwrap(), fixed);
        assert!(matches!(
            FixedBigRational::try_from(FloatingBigRational::nan()),
            Err(RationalError::NonFinite { .. })
        ));
    }
}
