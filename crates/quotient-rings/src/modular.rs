//! Residue rings Z/M.

use crate::traits::{CommutativeRing, Ring};
use quotient_integers::ModInt;

impl<const M: u64> Ring for ModInt<M> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl<const M: u64> CommutativeRing for ModInt<M> {}
