//! Algebraic structure traits.
//!
//! These traits name the algebra each value type in the tower obeys, so
//! generic code (powers, scalar multiples, ring-law tests) can be written
//! once for modular integers, exact rationals and complex rationals.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Equality must be reflexive, which is why extended number lines
/// carrying a NaN cannot be rings here.
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// `n * self` by doubling, so large multiples cost `O(log n)` additions.
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut sum = Self::zero();
        let mut addend = self.clone();
        let mut remaining = n.unsigned_abs();

        while remaining > 0 {
            if remaining & 1 == 1 {
                sum = sum + addend.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                addend = addend.clone() + addend;
            }
        }

        if n < 0 {
            -sum
        } else {
            sum
        }
    }

    /// `self^n` by repeated squaring.
    ///
    /// `x^0` is `one()` for every x, zero included.
    fn pow(&self, n: u32) -> Self {
        let mut product = Self::one();
        let mut square = self.clone();
        let mut remaining = n;

        while remaining > 0 {
            if remaining & 1 == 1 {
                product = product * square.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                square = square.clone() * square;
            }
        }

        product
    }
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element has a
/// multiplicative inverse.
pub trait Field: CommutativeRing {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// Returns `None` if `other` is zero.
    fn checked_field_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|inverse| self.clone() * inverse)
    }
}
