//! Enumerations of the rationals by walking the integer lattice.
//!
//! [`positive`] zig-zags along the diagonals `p + q = 2, 3, 4, ...` of the
//! positive quadrant and keeps the pairs already in lowest terms, which
//! visits every positive rational exactly once. [`spiral`] walks a square
//! spiral out from the origin through all four quadrants and so reaches
//! zero and the negatives as well.
//!
//! Each call starts a fresh walk; iterators share no state.

use std::marker::PhantomData;

use num_traits::{One, Zero};
use quotient_integers::Integer;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::base::BigRational;

/// Every positive rational: `1, 1/2, 2, 3, 1/3, 1/4, 2/3, 3/2, 4, 5, ...`.
#[must_use]
pub fn positive<T: BigRational>() -> Positive<T> {
    Positive {
        p: Integer::one(),
        q: Integer::one(),
        _marker: PhantomData,
    }
}

/// Every rational: `0, 1, -1, -1/2, 1/2, 2, -2, -2/3, -1/3, 1/3, ...`.
#[must_use]
pub fn spiral<T: BigRational>() -> Spiral<T> {
    Spiral {
        p: Integer::zero(),
        q: Integer::zero(),
        heading: Heading::North,
        seen: FxHashSet::default(),
        _marker: PhantomData,
    }
}

/// The pair after `(p, q)` on the diagonal zig-zag.
///
/// Odd diagonals run with `p` rising, even diagonals with `p` falling; each
/// turns onto the next diagonal at an axis.
fn zig_zag(p: &Integer, q: &Integer) -> (Integer, Integer) {
    let rising = !(p + q).rem_floor(&Integer::new(2)).is_zero();
    let one = Integer::one();
    if rising {
        if q.is_one() {
            (p + &one, one)
        } else {
            (p + &one, q - &one)
        }
    } else if p.is_one() {
        (one.clone(), q + &one)
    } else {
        (p - &one, q + &one)
    }
}

/// Iterator returned by [`positive`].
#[derive(Clone, Debug)]
pub struct Positive<T> {
    p: Integer,
    q: Integer,
    _marker: PhantomData<T>,
}

impl<T: BigRational> Iterator for Positive<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let (p, q) = zig_zag(&self.p, &self.q);
            let p = std::mem::replace(&mut self.p, p);
            let q = std::mem::replace(&mut self.q, q);

            if p.gcd(&q).is_one() {
                return Some(T::canonical(p, q));
            }
            trace!(%p, %q, "skipping reducible pair");
        }
    }
}

impl<T: BigRational> std::iter::FusedIterator for Positive<T> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    North,
    East,
    South,
    West,
}

/// The lattice point after `(p, q)` on the square spiral, and the heading
/// to leave it by.
fn spiral_step(p: &Integer, q: &Integer, heading: Heading) -> (Integer, Integer, Heading) {
    let one = Integer::one();
    match heading {
        Heading::North => {
            let q = q + &one;
            let turn = q == p.abs() + one;
            (p.clone(), q, if turn { Heading::East } else { heading })
        }
        Heading::East => {
            let p = p + &one;
            let turn = &p == q;
            (p, q.clone(), if turn { Heading::South } else { heading })
        }
        Heading::South => {
            let q = q - &one;
            let turn = &q.abs() == p;
            (p.clone(), q, if turn { Heading::West } else { heading })
        }
        Heading::West => {
            let p = p - &one;
            let turn = &p == q;
            (p, q.clone(), if turn { Heading::North } else { heading })
        }
    }
}

/// Iterator returned by [`spiral`].
///
/// Distinct lattice points name the same rational many times over, so the
/// walk remembers what it has already yielded.
#[derive(Clone, Debug)]
pub struct Spiral<T> {
    p: Integer,
    q: Integer,
    heading: Heading,
    seen: FxHashSet<(Integer, Integer)>,
    _marker: PhantomData<T>,
}

impl<T: BigRational> Iterator for Spiral<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let (p, q, heading) = spiral_step(&self.p, &self.q, self.heading);
            self.p = p.clone();
            self.q = q.clone();
            self.heading = heading;

            if q.is_zero() {
                continue;
            }
            let value = T::canonical(p, q);
            let key = (value.numerator().clone(), value.denominator().clone());
            if self.seen.insert(key) {
                return Some(value);
            }
            trace!(%value, "skipping repeated rational");
        }
    }
}

impl<T: BigRational> std::iter::FusedIterator for Spiral<T> {}
