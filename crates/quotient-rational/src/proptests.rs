//! Property-based tests for the rational core.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;
    use quotient_integers::Integer;

    use crate::{
        equivalent, BigRational, ContinuedFraction, FixedBigRational, FloatingBigRational,
        Progression,
    };

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fixed() -> impl Strategy<Value = FixedBigRational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| FixedBigRational::over(n, d).unwrap())
    }

    fn floating() -> impl Strategy<Value = FloatingBigRational> {
        (small_int(), small_int()).prop_map(|(n, d)| FloatingBigRational::over(n, d))
    }

    fn is_canonical<T: BigRational>(value: &T) -> bool {
        let (n, d) = (value.numerator(), value.denominator());
        // NaN is the one pair stored as 0/0.
        value.is_nan() || (!d.is_negative() && n.gcd(d).is_one())
    }

    proptest! {
        #[test]
        fn construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
            let floating = FloatingBigRational::over(n, d);
            prop_assert!(is_canonical(&floating));
            if d != 0 {
                let fixed = FixedBigRational::over(n, d).unwrap();
                prop_assert!(is_canonical(&fixed));
                prop_assert!(equivalent(&fixed, &floating));
            }
        }

        #[test]
        fn arithmetic_stays_canonical(a in fixed(), b in fixed()) {
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            if let Ok(quotient) = a.checked_div(&b) {
                prop_assert!(is_canonical(&quotient));
            }
        }

        #[test]
        fn fixed_field_laws(a in fixed(), b in fixed(), c in fixed()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert_eq!(&a - &a, FixedBigRational::zero());
            if !a.is_zero() {
                prop_assert_eq!(&a * &a.checked_recip().unwrap(), FixedBigRational::one());
            }
        }

        #[test]
        fn ordering_matches_subtraction(a in fixed(), b in fixed()) {
            prop_assert_eq!(a.cmp(&b), (&a - &b).signum().cmp(&0));
        }

        #[test]
        fn floating_agrees_with_fixed_when_finite(a in fixed(), b in fixed()) {
            let (x, y) = (FloatingBigRational::from(&a), FloatingBigRational::from(&b));
            prop_assert!(equivalent(&(&a + &b), &(&x + &y)));
            prop_assert!(equivalent(&(&a * &b), &(&x * &y)));
            prop_assert_eq!(a.total_cmp(&b), x.total_cmp(&y));
        }

        #[test]
        fn nan_absorbs(a in floating()) {
            let nan = FloatingBigRational::nan();
            prop_assert!((&a + &nan).is_nan());
            prop_assert!((&nan * &a).is_nan());
            prop_assert!((&a / &nan).is_nan());
            prop_assert!(a != nan);
        }

        #[test]
        fn f64_round_trip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            prop_assert_eq!(FloatingBigRational::from(v).to_f64(), v);
            prop_assert_eq!(FixedBigRational::from_f64(v).unwrap().to_f64(), v);
        }

        #[test]
        fn f32_round_trip(v in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
            prop_assert_eq!(FloatingBigRational::from(v).to_f32(), v);
            prop_assert_eq!(FixedBigRational::from_f32(v).unwrap().to_f32(), v);
        }

        #[test]
        fn parse_display_round_trip(a in fixed()) {
            prop_assert_eq!(a.to_string().parse::<FixedBigRational>().unwrap(), a.clone());
            let floating = FloatingBigRational::from(&a);
            prop_assert_eq!(floating.to_string().parse::<FloatingBigRational>().unwrap(), floating);
        }

        #[test]
        fn rounding_brackets_value(a in fixed()) {
            let (floor, ceil, round) = (a.floor(), a.ceil(), a.round());
            prop_assert!(floor <= a && a <= ceil);
            prop_assert!(&ceil - &floor <= FixedBigRational::one());
            prop_assert!((&round - &a).abs() <= FixedBigRational::over(1, 2).unwrap());
        }

        #[test]
        fn continued_fraction_inverts(a in fixed()) {
            let cf = ContinuedFraction::from_rational(&a).unwrap();
            prop_assert_eq!(cf.to_rational::<FixedBigRational>(), a);
        }

        #[test]
        fn progression_steps_are_even(n in 0i64..20, d in 1i64..8) {
            let last = FixedBigRational::over(n, d).unwrap();
            let step = FixedBigRational::over(1, d).unwrap();
            let values: Vec<FixedBigRational> = Progression::range_to(FixedBigRational::zero(), last.clone())
                .step(step.clone())
                .unwrap()
                .iter()
                .collect::<Result<_, _>>()
                .unwrap();
            prop_assert_eq!(values.len(), usize::try_from(n).unwrap() + 1);
            prop_assert_eq!(values.last(), Some(&last));
            for pair in values.windows(2) {
                prop_assert_eq!(&pair[1] - &pair[0], step.clone());
            }
        }

        #[test]
        fn powi_matches_repeated_multiplication(a in fixed(), e in 0i32..6) {
            let mut expected = FixedBigRational::one();
            for _ in 0..e {
                expected = &expected * &a;
            }
            prop_assert_eq!(a.powi(e).unwrap(), expected);
        }

        #[test]
        fn integer_division_identity(a in fixed(), b in fixed()) {
            if let Ok((quotient, remainder)) = a.divide_and_remainder(&b) {
                prop_assert!(quotient.is_integer());
                prop_assert_eq!(&(&quotient * &b) + &remainder, a);
            }
        }

        #[test]
        fn from_integer_is_integral(n in any::<i64>()) {
            let value = FixedBigRational::from(Integer::new(n));
            prop_assert_eq!(value.to_integer(), Some(Integer::new(n)));
        }
    }
}
