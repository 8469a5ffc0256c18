//! Property-based tests for complex arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quotient_rational::FixedBigRational;

    use crate::FixedBigComplex;

    fn rational() -> impl Strategy<Value = FixedBigRational> {
        (-200i64..200i64, 1i64..50i64).prop_map(|(n, d)| FixedBigRational::over(n, d).unwrap())
    }

    fn complex() -> impl Strategy<Value = FixedBigComplex> {
        (rational(), rational()).prop_map(|(a, b)| FixedBigComplex::from_parts(a, b))
    }

    proptest! {
        #[test]
        fn conjugate_product_is_real(z in complex()) {
            let product = &z * &z.conjugate();
            prop_assert!(product.imag().is_zero());
            prop_assert_eq!(product.real(), &z.norm());
            prop_assert_eq!(
                z.norm(),
                z.real() * z.real() + z.imag().value() * z.imag().value()
            );
        }

        #[test]
        fn multiplication_commutes(z in complex(), w in complex()) {
            prop_assert_eq!(&z * &w, &w * &z);
        }

        #[test]
        fn distributive(z in complex(), w in complex(), v in complex()) {
            prop_assert_eq!(&z * &(&w + &v), &(&z * &w) + &(&z * &v));
        }

        #[test]
        fn reciprocal_inverts(z in complex()) {
            if !z.is_zero() {
                prop_assert_eq!(&z * &z.checked_recip().unwrap(), FixedBigComplex::one());
            }
        }

        #[test]
        fn conjugate_is_an_involution(z in complex()) {
            prop_assert_eq!(z.conjugate().conjugate(), z);
        }

        #[test]
        fn norm_is_multiplicative(z in complex(), w in complex()) {
            prop_assert_eq!((&z * &w).norm(), &z.norm() * &w.norm());
        }
    }
}
