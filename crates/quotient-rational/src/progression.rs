//! Bounded arithmetic progressions over big rationals.
//!
//! A progression is a read-only description `first, first + step, ...`
//! up to and including `last`. Walking it never mutates the progression:
//! each iterator carries its own cursor, so iterating again starts over.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::base::BigRational;
use crate::error::ProgressionError;

/// A closed, stepped range of rationals.
#[derive(Clone, Debug)]
pub struct Progression<T> {
    first: T,
    last: T,
    increment: T,
    ascending: bool,
}

impl<T: BigRational> Progression<T> {
    /// `first..=last` counting up by one.
    #[must_use]
    pub fn range_to(first: T, last: T) -> Self {
        Self {
            first,
            last,
            increment: T::one(),
            ascending: true,
        }
    }

    /// `first` down to `last` counting down by one.
    #[must_use]
    pub fn down_to(first: T, last: T) -> Self {
        Self {
            first,
            last,
            increment: -T::one(),
            ascending: false,
        }
    }

    /// Replaces the step.
    ///
    /// A NaN step is accepted here and reported when the progression is
    /// first walked.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::InvalidStep`] if the step is zero or its
    /// sign does not match the direction.
    pub fn step(self, increment: T) -> Result<Self, ProgressionError> {
        let wanted = if self.ascending { 1 } else { -1 };
        if !increment.is_nan() && increment.signum() != wanted {
            debug!(
                variant = T::VARIANT,
                step = %increment,
                ascending = self.ascending,
                "rejected progression step"
            );
            return Err(ProgressionError::InvalidStep {
                step: increment.to_string(),
                direction: self.direction(),
            });
        }
        Ok(Self { increment, ..self })
    }

    /// The starting value.
    pub fn first(&self) -> &T {
        &self.first
    }

    /// The inclusive bound.
    pub fn last(&self) -> &T {
        &self.last
    }

    /// The step added on each advance.
    pub fn increment(&self) -> &T {
        &self.increment
    }

    /// Returns true when counting up.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Walks the progression from `first`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            progression: self,
            cursor: Cursor::Start,
        }
    }

    /// Returns true when walking would yield nothing at all.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns true if `value` lies between the bounds, ignoring the step.
    pub fn contains(&self, value: &T) -> bool {
        if value.is_nan() || self.first.is_nan() || self.last.is_nan() {
            return false;
        }
        let (low, high) = if self.ascending {
            (&self.first, &self.last)
        } else {
            (&self.last, &self.first)
        };
        low.total_cmp(value) != Ordering::Greater && value.total_cmp(high) != Ordering::Greater
    }

    fn direction(&self) -> &'static str {
        if self.ascending {
            "ascending"
        } else {
            "descending"
        }
    }

    fn is_past_last(&self, value: &T) -> bool {
        let overshoot = if self.ascending {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        value.total_cmp(&self.last) == overshoot
    }

    fn check_walkable(&self) -> Result<(), ProgressionError> {
        if self.first.is_finite() && self.last.is_finite() && self.increment.is_finite() {
            return Ok(());
        }
        debug!(variant = T::VARIANT, progression = %self, "illegal progression state");
        Err(ProgressionError::IllegalProgressionState {
            reason: format!("{self} has a bound or step that is not finite"),
        })
    }
}

impl<T: BigRational> fmt::Display for Progression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ascending {
            write!(f, "{}..{} step {}", self.first, self.last, self.increment)
        } else {
            write!(f, "{} downTo {} step {}", self.first, self.last, self.increment)
        }
    }
}

/// Progressions are equal when their bounds, step and direction are.
impl<T: BigRational + PartialEq> PartialEq for Progression<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ascending == other.ascending
            && self.first == other.first
            && self.last == other.last
            && self.increment == other.increment
    }
}

impl<'a, T: BigRational> IntoIterator for &'a Progression<T> {
    type Item = Result<T, ProgressionError>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
enum Cursor<T> {
    Start,
    At(T),
    Done,
}

/// The next cursor after `cursor`, and the item to yield on the way.
fn advance<T: BigRational>(
    progression: &Progression<T>,
    cursor: &Cursor<T>,
) -> (Cursor<T>, Option<Result<T, ProgressionError>>) {
    let candidate = match cursor {
        Cursor::Done => return (Cursor::Done, None),
        Cursor::Start => {
            if let Err(err) = progression.check_walkable() {
                return (Cursor::Done, Some(Err(err)));
            }
            progression.first.clone()
        }
        Cursor::At(current) => current.clone() + progression.increment.clone(),
    };

    if progression.is_past_last(&candidate) {
        (Cursor::Done, None)
    } else {
        (Cursor::At(candidate.clone()), Some(Ok(candidate)))
    }
}

/// An iterator over the values of a [`Progression`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    progression: &'a Progression<T>,
    cursor: Cursor<T>,
}

impl<T: BigRational> Iterator for Iter<'_, T> {
    type Item = Result<T, ProgressionError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (cursor, item) = advance(self.progression, &self.cursor);
        self.cursor = cursor;
        item
    }
}

impl<T: BigRational> std::iter::FusedIterator for Iter<'_, T> {}
