//! A single closed-open span `[begin, end)` over any totally-ordered time domain.
//!
//! Ordering between intervals is expressed through named relations rather than
//! `PartialOrd`: [`Interval::precedes`] is the only primitive, [`Interval::follows`]
//! is its mirror, and [`Interval::overlaps`] is defined as "neither precedes the
//! other". Two overlapping intervals are mutually non-preceding, which is not the
//! same thing as being equal, so a comparison operator would be misleading.

use std::cmp;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// A closed-open time span `[begin, end)` with `begin <= end`.
///
/// Intervals are immutable: [`intersect`](Interval::intersect) and
/// [`union`](Interval::union) return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawInterval<T>",
    bound(deserialize = "T: Deserialize<'de> + Ord")
)]
pub struct Interval<T> {
    begin: T,
    end: T,
}

/// Unvalidated wire shape, checked by `TryFrom` before becoming an [`Interval`].
#[derive(Deserialize)]
struct RawInterval<T> {
    begin: T,
    end: T,
}

impl<T: Ord> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = AgendaError;

    fn try_from(raw: RawInterval<T>) -> Result<Self> {
        Self::new(raw.begin, raw.end)
    }
}

impl<T: Ord> TryFrom<(T, T)> for Interval<T> {
    type Error = AgendaError;

    fn try_from((begin, end): (T, T)) -> Result<Self> {
        Self::new(begin, end)
    }
}

impl<T> Interval<T> {
    /// Start of the span (inclusive).
    pub fn begin(&self) -> &T {
        &self.begin
    }

    /// End of the span (exclusive).
    pub fn end(&self) -> &T {
        &self.end
    }

    /// Consume the interval, returning `(begin, end)`.
    pub fn into_parts(self) -> (T, T) {
        (self.begin, self.end)
    }
}

impl<T: Ord> Interval<T> {
    /// Create an interval, rejecting `begin > end` with
    /// [`AgendaError::MalformedInterval`]. Zero-length spans are accepted.
    pub fn new(begin: T, end: T) -> Result<Self> {
        if begin > end {
            return Err(AgendaError::MalformedInterval);
        }
        Ok(Self { begin, end })
    }

    /// Caller guarantees `begin <= end`.
    pub(crate) fn new_unchecked(begin: T, end: T) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    /// True iff this interval is done by the time `other` begins
    /// (`self.end <= other.begin`).
    pub fn precedes(&self, other: &Self) -> bool {
        self.end <= other.begin
    }

    /// True iff `other` is done by the time this interval begins.
    pub fn follows(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    /// True iff neither interval precedes the other.
    ///
    /// Adjacent intervals (`a.end == b.begin`) do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.precedes(other) || other.precedes(self))
    }

    /// True iff `other` lies entirely within this interval.
    pub fn contains(&self, other: &Self) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// True iff `begin == end`.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// The period common to both intervals: `[max(begins), min(ends))`.
    ///
    /// Fails with [`AgendaError::InvalidOperation`] unless the two overlap.
    pub fn intersect(&self, other: &Self) -> Result<Self> {
        if !self.overlaps(other) {
            return Err(AgendaError::InvalidOperation(
                "intersect requires overlapping intervals",
            ));
        }
        Ok(Self {
            begin: cmp::max(&self.begin, &other.begin).clone(),
            end: cmp::min(&self.end, &other.end).clone(),
        })
    }

    /// The period spanning both intervals: `[min(begins), max(ends))`.
    ///
    /// Fails with [`AgendaError::InvalidOperation`] unless the two overlap; a
    /// span across a gap is not a union.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.overlaps(other) {
            return Err(AgendaError::InvalidOperation(
                "union requires overlapping intervals",
            ));
        }
        Ok(self.hull(other))
    }

    /// `[min(begins), max(ends))` without the overlap check.
    pub(crate) fn hull(&self, other: &Self) -> Self {
        Self {
            begin: cmp::min(&self.begin, &other.begin).clone(),
            end: cmp::max(&self.end, &other.end).clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.begin, self.end)
    }
}
