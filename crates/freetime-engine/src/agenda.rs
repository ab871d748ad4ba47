//! An ordered collection of intervals with set-like operations.
//!
//! An [`Agenda`] is either *unnormalized* (an append-only bag with no ordering
//! guarantee) or *normalized* (sorted by `begin`, each interval preceding the
//! next). [`Agenda::normalize`] and [`Agenda::normalized`] are the only ways
//! into the normalized state; [`Agenda::append`] may leave it again.
//!
//! [`Agenda::complement`] always works on a normalized copy, so callers never
//! have to normalize a busy agenda before asking for its free time.

use std::cmp;
use std::mem;
use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::interval::Interval;

/// A sequence of [`Interval`]s, typically one calendar's busy (or free) time.
///
/// Serializes as a plain array of intervals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(deserialize = "T: Deserialize<'de> + Ord")
)]
pub struct Agenda<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> Default for Agenda<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Agenda<T> {
    /// An empty agenda.
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Add an interval to the end. No reordering and no deduplication happen.
    pub fn append(&mut self, appt: Interval<T>) {
        self.intervals.push(appt);
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }
}

impl<T: Ord + Clone> Agenda<T> {
    /// Every pairwise overlap between this agenda and `other`.
    ///
    /// Pairs are visited in nested order (each interval of `self`, then each of
    /// `other`). The result is not normalized: if either input has overlapping
    /// intervals of its own, the fragments may overlap too.
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for a in &self.intervals {
            for b in &other.intervals {
                // `intersect` fails exactly when the pair does not overlap.
                if let Ok(common) = a.intersect(b) {
                    result.append(common);
                }
            }
        }
        result
    }

    /// The part of every interval that falls inside `block`, in agenda order.
    pub fn clip(&self, block: &Interval<T>) -> Self {
        self.intervals
            .iter()
            .filter_map(|appt| appt.intersect(block).ok())
            .collect()
    }

    /// Sort by `begin` (ties by `end`) and merge overlapping intervals in place.
    ///
    /// Afterwards each interval precedes the next one, and the covered time is
    /// the same as before. Adjacent intervals (`a.end == b.begin`) already
    /// precede each other and stay separate.
    pub fn normalize(&mut self) {
        let mut intervals = mem::take(&mut self.intervals);
        let input_len = intervals.len();
        intervals.sort_by(|a, b| a.begin().cmp(b.begin()).then_with(|| a.end().cmp(b.end())));

        let mut sorted = intervals.into_iter();
        let Some(mut cur) = sorted.next() else {
            return;
        };

        let mut merged = Vec::with_capacity(input_len);
        for appt in sorted {
            if cur.precedes(&appt) {
                merged.push(cur);
                cur = appt;
            } else {
                // Sorted by begin and not preceded, so the two overlap.
                cur = cur.hull(&appt);
            }
        }
        merged.push(cur);

        debug!(input = input_len, output = merged.len(), "normalized agenda");
        self.intervals = merged;
    }

    /// A normalized copy; `self` is left untouched.
    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }

    /// True iff the agenda is in canonical form: each interval precedes the next.
    pub fn is_normalized(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].precedes(&w[1]))
    }

    /// The time inside `freeblock` not covered by any interval of this agenda.
    ///
    /// The busy set is normalized first. Free intervals come out sorted and
    /// maximal; a busy interval reaching past either edge of `freeblock` is cut
    /// at the edge.
    pub fn complement(&self, freeblock: &Interval<T>) -> Self {
        let busy = self.normalized();
        let mut free = Self::new();
        let mut cursor = freeblock.begin().clone();

        for appt in &busy.intervals {
            if appt.precedes(freeblock) {
                continue;
            }
            if appt.follows(freeblock) {
                // Everything from here on starts after the block.
                break;
            }
            if cursor < *appt.begin() {
                trace!("free gap before busy interval");
                free.append(Interval::new_unchecked(cursor.clone(), appt.begin().clone()));
            }
            cursor = cmp::max(cursor, appt.end().clone());
        }

        if cursor < *freeblock.end() {
            free.append(Interval::new_unchecked(cursor, freeblock.end().clone()));
        }

        debug!(busy = busy.len(), free = free.len(), "computed complement");
        free
    }
}

impl<T> From<Vec<Interval<T>>> for Agenda<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        Self { intervals }
    }
}

impl<T> From<Agenda<T>> for Vec<Interval<T>> {
    fn from(agenda: Agenda<T>) -> Self {
        agenda.intervals
    }
}

impl<T> FromIterator<Interval<T>> for Agenda<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Interval<T>> for Agenda<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}

impl<T> IntoIterator for Agenda<T> {
    type Item = Interval<T>;
    type IntoIter = vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Agenda<T> {
    type Item = &'a Interval<T>;
    type IntoIter = slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
