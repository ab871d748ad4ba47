//! Tests for multi-calendar free/busy queries and free slot computation.

use chrono::{DateTime, TimeZone, Utc};
use freetime_engine::freebusy::{
    combined_busy, common_busy, common_free, find_first_free_slot, find_free_slots,
};
use freetime_engine::{Agenda, Interval};

/// Helper to create a datetime on 2026-03-01.
fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, min, 0).unwrap()
}

/// Helper to create a busy agenda from (start_hour, start_min, end_hour, end_min).
fn calendar(spans: &[(u32, u32, u32, u32)]) -> Agenda<DateTime<Utc>> {
    spans
        .iter()
        .map(|&(sh, sm, eh, em)| Interval::new(at(sh, sm), at(eh, em)).unwrap())
        .collect()
}

fn window(start_hour: u32, end_hour: u32) -> Interval<DateTime<Utc>> {
    Interval::new(at(start_hour, 0), at(end_hour, 0)).unwrap()
}

fn hours(spans: &[(u32, u32)]) -> Agenda<u32> {
    spans
        .iter()
        .map(|&(b, e)| Interval::new(b, e).unwrap())
        .collect()
}

#[test]
fn single_event_produces_two_free_slots() {
    let busy = calendar(&[(10, 0, 11, 0)]);

    let slots = find_free_slots(&busy, &window(8, 17));

    assert_eq!(slots.len(), 2, "single event should produce 2 free slots");
    assert_eq!(slots[0].start, at(8, 0));
    assert_eq!(slots[0].end, at(10, 0));
    assert_eq!(slots[0].duration_minutes, 120);
    assert_eq!(slots[1].start, at(11, 0));
    assert_eq!(slots[1].end, at(17, 0));
    assert_eq!(slots[1].duration_minutes, 360);
}

#[test]
fn no_events_entire_window_is_free() {
    let slots = find_free_slots(&Agenda::new(), &window(8, 17));

    assert_eq!(slots.len(), 1, "no events should produce one free slot");
    assert_eq!(slots[0].start, at(8, 0));
    assert_eq!(slots[0].end, at(17, 0));
    assert_eq!(slots[0].duration_minutes, 540);
}

#[test]
fn events_filling_entire_window_no_free_slots() {
    let busy = calendar(&[(9, 0, 12, 0)]);
    assert!(find_free_slots(&busy, &window(9, 12)).is_empty());
}

#[test]
fn find_first_free_slot_with_minimum_duration() {
    // Gaps: 08:30-09:00 (30 min), 12:00-17:00 (300 min).
    let busy = calendar(&[(8, 0, 8, 30), (9, 0, 12, 0)]);

    let slot = find_first_free_slot(&busy, &window(8, 17), 60).unwrap();

    assert_eq!(slot.start, at(12, 0));
    assert_eq!(slot.end, at(17, 0));
    assert_eq!(slot.duration_minutes, 300);
}

#[test]
fn find_first_free_slot_no_gap_large_enough() {
    let busy = calendar(&[(9, 0, 10, 0), (10, 15, 12, 0)]);
    assert!(find_first_free_slot(&busy, &window(9, 12), 60).is_none());
}

#[test]
fn combined_busy_merges_across_calendars() {
    let alice = hours(&[(9, 10), (13, 14)]);
    let bob = hours(&[(9, 11), (16, 17)]);

    assert_eq!(
        combined_busy(&[alice, bob]),
        hours(&[(9, 11), (13, 14), (16, 17)])
    );
}

#[test]
fn common_busy_is_time_when_everyone_is_busy() {
    let alice = hours(&[(9, 12), (14, 16)]);
    let bob = hours(&[(10, 15)]);
    let carol = hours(&[(11, 18)]);

    assert_eq!(
        common_busy(&[alice, bob, carol]),
        hours(&[(11, 12), (14, 15)])
    );
}

#[test]
fn common_busy_of_single_calendar_is_its_normal_form() {
    let alice = hours(&[(3, 5), (1, 4)]);
    assert_eq!(common_busy(&[alice]), hours(&[(1, 5)]));
}

#[test]
fn common_busy_of_no_calendars_is_empty() {
    assert!(common_busy::<u32>(&[]).is_empty());
}

#[test]
fn common_free_finds_shared_gaps() {
    let alice = hours(&[(9, 10), (13, 14)]);
    let bob = hours(&[(11, 12), (13, 15)]);

    let free = common_free(&[alice, bob], &Interval::new(8, 17).unwrap());

    assert_eq!(free, hours(&[(8, 9), (10, 11), (12, 13), (15, 17)]));
}

#[test]
fn common_free_of_no_calendars_is_whole_window() {
    let free = common_free::<u32>(&[], &Interval::new(8, 17).unwrap());
    assert_eq!(free, hours(&[(8, 17)]));
}
