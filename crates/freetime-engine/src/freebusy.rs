//! Free/busy queries across several calendars.
//!
//! Each calendar is an [`Agenda`] of busy time. The generic helpers combine
//! calendars with the agenda algebra; the `DateTime<Utc>` helpers turn the
//! resulting free time into [`FreeSlot`]s with a duration attached.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::agenda::Agenda;
use crate::interval::Interval;

/// A free time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl From<&Interval<DateTime<Utc>>> for FreeSlot {
    fn from(interval: &Interval<DateTime<Utc>>) -> Self {
        let (start, end) = (*interval.begin(), *interval.end());
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// Time when at least one calendar is busy, in canonical form.
pub fn combined_busy<T: Ord + Clone>(calendars: &[Agenda<T>]) -> Agenda<T> {
    let mut busy: Agenda<T> = calendars
        .iter()
        .flat_map(|calendar| calendar.iter().cloned())
        .collect();
    busy.normalize();
    busy
}

/// Time when every calendar is busy, in canonical form.
///
/// Folds pairwise [`Agenda::intersect`] over the calendars, normalizing after
/// each step so fragments never pile up. No calendars means no common busy time.
pub fn common_busy<T: Ord + Clone>(calendars: &[Agenda<T>]) -> Agenda<T> {
    let Some((first, rest)) = calendars.split_first() else {
        return Agenda::new();
    };

    rest.iter().fold(first.normalized(), |acc, calendar| {
        acc.intersect(&calendar.normalized()).normalized()
    })
}

/// Time inside `window` when no calendar is busy.
pub fn common_free<T: Ord + Clone>(calendars: &[Agenda<T>], window: &Interval<T>) -> Agenda<T> {
    let free = combined_busy(calendars).complement(window);
    debug!(
        calendars = calendars.len(),
        free = free.len(),
        "computed common free time"
    );
    free
}

/// Free slots inside `window` given one busy agenda, sorted by start.
pub fn find_free_slots(
    busy: &Agenda<DateTime<Utc>>,
    window: &Interval<DateTime<Utc>>,
) -> Vec<FreeSlot> {
    busy.complement(window).iter().map(FreeSlot::from).collect()
}

/// The first free slot of at least `min_duration_minutes` inside `window`.
///
/// Delegates to [`find_free_slots`].
pub fn find_first_free_slot(
    busy: &Agenda<DateTime<Utc>>,
    window: &Interval<DateTime<Utc>>,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(busy, window)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
