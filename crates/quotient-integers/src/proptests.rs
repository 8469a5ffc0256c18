//! Property-based tests for integers and residue rings.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Mod3Int, ModInt};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(g.is_positive());
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn floored_division_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            let r = a.rem_floor(&b);

            prop_assert_eq!(q * b.clone() + r.clone(), a);
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
        }

        #[test]
        fn isqrt_brackets_root(n in 0i64..1_000_000i64) {
            let n = Integer::new(n);
            let root = n.isqrt().unwrap();
            let next = root.clone() + Integer::new(1);

            prop_assert!(&root * &root <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn mod3_residue_in_range(n in any::<i64>()) {
            let r = Mod3Int::value_of(n).value();
            prop_assert!(r < 3);
            prop_assert_eq!(i128::from(r), i128::from(n).rem_euclid(3));
        }

        #[test]
        fn mod3_additive_inverse(n in any::<i64>()) {
            let a = Mod3Int::value_of(n);
            prop_assert_eq!(a + (-a), Mod3Int::ZERO);
            prop_assert_eq!(-a, Mod3Int::value_of(0) - a);
        }

        #[test]
        fn mod3_homomorphism(a in small_int(), b in small_int()) {
            prop_assert_eq!(Mod3Int::value_of(a) + Mod3Int::value_of(b), Mod3Int::value_of(a + b));
            prop_assert_eq!(Mod3Int::value_of(a) - Mod3Int::value_of(b), Mod3Int::value_of(a - b));
            prop_assert_eq!(Mod3Int::value_of(a) * Mod3Int::value_of(b), Mod3Int::value_of(a * b));
        }

        #[test]
        fn big_and_small_reduction_agree(n in any::<i64>()) {
            prop_assert_eq!(ModInt::<7>::from_integer(&Integer::new(n)), ModInt::<7>::value_of(n));
        }

        #[test]
        fn modint_inverse(a in 1u64..1000u64) {
            const P: u64 = 998_244_353;
            let a = ModInt::<P>::new(a);
            let inv = a.inv().expect("inverse should exist for non-zero mod prime");
            prop_assert_eq!((a * inv).value(), 1);
        }
    }
}
