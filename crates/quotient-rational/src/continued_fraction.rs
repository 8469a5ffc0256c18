//! Simple continued fractions of finite rationals.

use std::fmt;
use std::marker::PhantomData;

use num_traits::{One, Zero};
use quotient_integers::Integer;
use tracing::trace;

use crate::base::BigRational;
use crate::error::RationalError;

/// A finite simple continued fraction `[a0; a1, ..., an]`.
///
/// `a0` may be any integer; every later term is positive.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ContinuedFraction {
    terms: Vec<Integer>,
}

impl ContinuedFraction {
    /// Expands a finite rational by repeated floored division.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NonFinite`] for the floating specials.
    pub fn from_rational<T: BigRational>(value: &T) -> Result<Self, RationalError> {
        if !value.is_finite() {
            return Err(RationalError::NonFinite {
                value: value.to_string(),
            });
        }

        let mut numerator = value.numerator().clone();
        let mut denominator = value.denominator().clone();
        let mut terms = Vec::new();

        while !denominator.is_zero() {
            let term = numerator.div_floor(&denominator);
            let remainder = &numerator - &(&term * &denominator);
            trace!(%term, %remainder, "continued fraction term");
            terms.push(term);
            numerator = std::mem::replace(&mut denominator, remainder);
        }

        Ok(Self { terms })
    }

    /// Builds a continued fraction from its terms.
    ///
    /// Returns `None` if there are no terms or a term after the first is
    /// not positive.
    #[must_use]
    pub fn from_terms(terms: Vec<Integer>) -> Option<Self> {
        let valid = !terms.is_empty() && terms[1..].iter().all(Integer::is_positive);
        valid.then_some(Self { terms })
    }

    /// `[1; 1, 1, ...]` with `n` terms, whose convergents approach the
    /// golden ratio through ratios of Fibonacci numbers.
    ///
    /// Returns `None` when `n` is zero.
    #[must_use]
    pub fn phi(n: usize) -> Option<Self> {
        Self::from_terms(vec![Integer::one(); n])
    }

    /// `[1; 2, 2, ...]` with `n` terms, approaching the square root of two.
    ///
    /// Returns `None` when `n` is zero.
    #[must_use]
    pub fn root2(n: usize) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let mut terms = vec![Integer::new(2); n];
        terms[0] = Integer::one();
        Self::from_terms(terms)
    }

    /// All terms, integer part first.
    #[must_use]
    pub fn terms(&self) -> &[Integer] {
        &self.terms
    }

    /// The integer part `a0`.
    #[must_use]
    pub fn integer_part(&self) -> &Integer {
        &self.terms[0]
    }

    /// The terms after the integer part.
    #[must_use]
    pub fn fractional_parts(&self) -> &[Integer] {
        &self.terms[1..]
    }

    /// The successive approximants `[a0;]`, `[a0; a1]`, ... ending at the
    /// exact value.
    pub fn convergents<T: BigRational>(&self) -> Convergents<'_, T> {
        Convergents {
            terms: self.terms.iter(),
            previous: (Integer::one(), Integer::zero()),
            before_previous: (Integer::zero(), Integer::one()),
            _marker: PhantomData,
        }
    }

    /// The exact value.
    #[must_use]
    pub fn to_rational<T: BigRational>(&self) -> T {
        self.convergents()
            .last()
            .unwrap_or_else(|| T::from_integer(self.integer_part().clone()))
    }
}

impl fmt::Debug for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContinuedFraction({self})")
    }
}

impl fmt::Display for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};", self.integer_part())?;
        for (i, term) in self.fractional_parts().iter().enumerate() {
            if i == 0 {
                write!(f, " {term}")?;
            } else {
                write!(f, ", {term}")?;
            }
        }
        f.write_str("]")
    }
}

/// Iterator returned by [`ContinuedFraction::convergents`].
#[derive(Clone, Debug)]
pub struct Convergents<'a, T> {
    terms: std::slice::Iter<'a, Integer>,
    previous: (Integer, Integer),
    before_previous: (Integer, Integer),
    _marker: PhantomData<T>,
}

impl<T: BigRational> Iterator for Convergents<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let term = self.terms.next()?;
        let numerator = term * &self.previous.0 + &self.before_previous.0;
        let denominator = term * &self.previous.1 + &self.before_previous.1;

        let next = (numerator.clone(), denominator.clone());
        self.before_previous = std::mem::replace(&mut self.previous, next);

        // Convergents are always in lowest terms with a positive denominator.
        Some(T::canonical(numerator, denominator))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.terms.size_hint()
    }
}

impl<T: BigRational> ExactSizeIterator for Convergents<'_, T> {}
