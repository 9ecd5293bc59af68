//! Binning of interview events onto calendar days.
//!
//! All functions are pure: they read the event slice, allocate a fresh
//! result, and never mutate or reorder the input. The reference instant
//! for the upcoming listing is always an explicit argument.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{CalendarEvent, EventStatus};

/// Events whose calendar date matches `day`, in input order.
///
/// A `None` day is a padding cell and yields no events. Time of day and
/// status do not affect membership.
pub fn events_on_day<'a>(
    events: &'a [CalendarEvent],
    day: Option<NaiveDate>,
) -> Vec<&'a CalendarEvent> {
    let Some(day) = day else {
        return Vec::new();
    };
    events.iter().filter(|e| e.date.date() == day).collect()
}

/// The first `cap` events of `day` plus the count of events beyond the cap.
///
/// `cap` of 0 is legal: nothing is visible and every match overflows.
pub fn visible_events_on_day<'a>(
    events: &'a [CalendarEvent],
    day: Option<NaiveDate>,
    cap: usize,
) -> (Vec<&'a CalendarEvent>, usize) {
    let matches = events_on_day(events, day);
    let total = matches.len();
    let mut visible = matches;
    visible.truncate(cap);
    let overflow = total - visible.len();
    (visible, overflow)
}

/// The next `limit` scheduled events at or after `now`, soonest first.
///
/// Only `Scheduled` events qualify. The sort is stable, so events sharing
/// a date keep their input order.
pub fn upcoming_events<'a>(
    events: &'a [CalendarEvent],
    now: NaiveDateTime,
    limit: usize,
) -> Vec<&'a CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.status == EventStatus::Scheduled && e.date >= now)
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(limit);
    upcoming
}
