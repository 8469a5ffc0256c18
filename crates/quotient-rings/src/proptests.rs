//! Ring axioms checked over the residue rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quotient_integers::{Mod3Int, ModInt};

    use crate::Ring;

    fn assert_ring_axioms<R: Ring>(a: R, b: R, c: R) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        prop_assert_eq!(
            (a.clone() * b.clone()) * c.clone(),
            a.clone() * (b.clone() * c.clone())
        );
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b.clone() + a.clone() * c
        );
        prop_assert_eq!(a.clone() + R::zero(), a.clone());
        prop_assert_eq!(a.clone() * R::one(), a.clone());
        prop_assert!((a.clone() + (-a.clone())).is_zero());
        prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        Ok(())
    }

    proptest! {
        #[test]
        fn mod3_is_a_ring(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            assert_ring_axioms(Mod3Int::value_of(a), Mod3Int::value_of(b), Mod3Int::value_of(c))?;
        }

        #[test]
        fn mod12_is_a_ring(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            assert_ring_axioms(
                ModInt::<12>::value_of(a),
                ModInt::<12>::value_of(b),
                ModInt::<12>::value_of(c),
            )?;
        }
    }
}
