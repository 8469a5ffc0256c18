//! Modular arithmetic.
//!
//! This module provides small residue rings Z/M with a compile-time
//! modulus. The number tower uses `Mod3Int`, the integers modulo 3.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// A residue class modulo `M`.
///
/// The stored residue is always in the canonical range `[0, M)`, and every
/// operation re-normalizes into that range, so the ring is closed and total.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const M: u64>(u64);

/// The ring of integers modulo 3.
pub type Mod3Int = ModInt<3>;

impl<const M: u64> ModInt<M> {
    /// The additive identity.
    pub const ZERO: Self = Self(0);

    /// The multiplicative identity.
    pub const ONE: Self = Self(1 % M);

    /// Creates a new modular integer from a non-negative value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % M)
    }

    /// Maps any signed integer to its residue class by floored modulo.
    ///
    /// Negative inputs land in `[0, M)` too: `value_of(-1)` is `M - 1`.
    #[must_use]
    pub fn value_of(value: i64) -> Self {
        // |i64::MIN| fits in i128, and so does every u64 modulus.
        let residue = i128::from(value).rem_euclid(i128::from(M));
        Self(residue as u64)
    }

    /// Maps an arbitrary precision integer to its residue class.
    #[must_use]
    pub fn from_integer(value: &Integer) -> Self {
        let residue = value.rem_floor(&Integer::from(M));
        Self(residue.to_u64().unwrap_or_default())
    }

    /// Returns the canonical residue.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        M
    }

    /// Computes the modular inverse using extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(self, M) != 1).
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(M);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        Some(Self(t.rem_euclid(i128::from(M)) as u64))
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::ONE;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }
}

impl ModInt<3> {
    /// The residue class of 2, which is also `-ONE`.
    pub const TWO: Self = Self(2);
}

impl<const M: u64> Zero for ModInt<M> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const M: u64> One for ModInt<M> {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl<const M: u64> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, M)
    }
}

impl<const M: u64> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const M: u64> Add for ModInt<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(M)) as u64)
    }
}

impl<const M: u64> Sub for ModInt<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(M - (rhs.0 - self.0))
        }
    }
}

impl<const M: u64> Mul for ModInt<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // Use u128 to avoid overflow
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(M)) as u64)
    }
}

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(M - self.0)
        }
    }
}

impl<const M: u64> From<u64> for ModInt<M> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const M: u64> From<i64> for ModInt<M> {
    fn from(value: i64) -> Self {
        Self::value_of(value)
    }
}
