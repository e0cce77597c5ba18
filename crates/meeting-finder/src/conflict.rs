//! Detect which existing events clash with a proposed meeting time.
//!
//! An event clashes when it shares at least one attendee with the meeting and
//! its time overlaps the proposed range. Adjacent ranges (one ends exactly when
//! the other starts) are NOT conflicts, and neither are zero-length events,
//! which never block a free range either.

use std::collections::HashSet;

use crate::event::Event;
use crate::time_range::TimeRange;

/// An event that clashes with a proposed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict<'a> {
    pub event: &'a Event,
    /// Attendees of the event who were wanted at the meeting, sorted by name.
    pub attendees: Vec<&'a str>,
    pub overlap_minutes: i32,
}

/// Find every event in `events` that keeps someone in `attendees` busy during `range`.
///
/// Results keep the order of `events`.
pub fn find_conflicts<'a>(
    events: &'a [Event],
    attendees: &HashSet<String>,
    range: &TimeRange,
) -> Vec<Conflict<'a>> {
    events
        .iter()
        .filter(|event| {
            let when = event.when();
            when.duration() > 0 && when.overlaps(range) && event.attends_any(attendees)
        })
        .map(|event| {
            let when = event.when();
            let overlap_minutes = when.end().min(range.end()) - when.start().max(range.start());
            let mut clashing: Vec<&str> = event
                .attendees()
                .iter()
                .filter(|name| attendees.contains(*name))
                .map(String::as_str)
                .collect();
            clashing.sort_unstable();
            Conflict {
                event,
                attendees: clashing,
                overlap_minutes,
            }
        })
        .collect()
}
