//! # freetime-engine
//!
//! Interval algebra for free/busy scheduling.
//!
//! Calendars are modelled as [`Agenda`]s of closed-open [`Interval`]s over any
//! totally-ordered time type. The engine answers three questions: where two
//! calendars overlap ([`Agenda::intersect`]), what a calendar's busy time looks
//! like once overlaps are merged ([`Agenda::normalize`]), and what time is left
//! free inside a window ([`Agenda::complement`]).
//!
//! ```rust
//! use freetime_engine::{Agenda, Interval};
//!
//! let mut busy = Agenda::new();
//! busy.append(Interval::new(1, 3).unwrap());
//! busy.append(Interval::new(2, 4).unwrap());
//!
//! let free = busy.complement(&Interval::new(0, 6).unwrap());
//! let spans: Vec<_> = free.iter().map(|i| (*i.begin(), *i.end())).collect();
//! assert_eq!(spans, vec![(0, 1), (4, 6)]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval`: precedes/follows/overlaps, intersect, union
//! - [`agenda`] — `Agenda`: append, intersect, normalize, complement
//! - [`freebusy`] — Multi-calendar queries and `DateTime<Utc>` free slots
//! - [`error`] — Error types

pub mod agenda;
pub mod error;
pub mod freebusy;
pub mod interval;

pub use agenda::Agenda;
pub use error::AgendaError;
pub use freebusy::{combined_busy, common_busy, common_free, find_free_slots, FreeSlot};
pub use interval::Interval;
