//! Find the free ranges of a day in which a meeting can be held.
//!
//! Every event contributes two boundary points, a `Start` and an `End`. The
//! points are sorted by time with `End` before `Start` at equal times, so a
//! meeting may begin in the minute one event ends and finish in the minute the
//! next one begins. A sweep then walks the points with two cursors:
//!
//! - the start cursor visits every point and tracks which conflicting events
//!   are open; an `End` point that leaves none open is a candidate start.
//! - the end cursor looks for the first conflicting `Start` after the candidate
//!   start. It never moves backwards, so the whole sweep is linear after the
//!   `O(n log n)` sort.
//!
//! [`query`] runs the sweep against all attendees first and falls back to the
//! mandatory attendees alone when that leaves no room.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::event::Event;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// Which conflict set produced a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// Mandatory and optional attendees are all free.
    AllAttendees,
    /// Only the mandatory attendees are free; optional attendees were dropped.
    MandatoryOnly,
    /// Neither pass found a range long enough.
    None,
}

/// The free ranges found for a request and the pass that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub pass: Pass,
    pub ranges: Vec<TimeRange>,
}

/// Free ranges for `request`, ascending by start.
///
/// Ranges where every mandatory and optional attendee is free are preferred.
/// If there are none, the ranges where the mandatory attendees alone are free
/// are returned. An empty result means the meeting does not fit anywhere.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_with_pass(events, request).ranges
}

/// Like [`query`], but also reports which pass produced the ranges.
pub fn query_with_pass(events: &[Event], request: &MeetingRequest) -> Availability {
    let everyone = request.all_attendees();
    let ranges = free_ranges(events, &everyone, request.duration());
    if !ranges.is_empty() {
        return Availability {
            pass: Pass::AllAttendees,
            ranges,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no range fits all attendees, retrying with mandatory attendees only"
    );
    query_mandatory_only(events, request)
}

/// Free ranges for `request` ignoring its optional attendees.
pub fn query_mandatory_only(events: &[Event], request: &MeetingRequest) -> Availability {
    let ranges = free_ranges(events, request.attendees(), request.duration());
    let pass = if ranges.is_empty() {
        Pass::None
    } else {
        Pass::MandatoryOnly
    };
    Availability { pass, ranges }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum BoundaryKind {
    // Declared first so it sorts first at equal times.
    End,
    Start,
}

#[derive(Debug, Clone, Copy)]
struct BoundaryPoint<'a> {
    time: i32,
    kind: BoundaryKind,
    /// Distinguishes events that are equal by value.
    owner: usize,
    event: &'a Event,
}

impl<'a> BoundaryPoint<'a> {
    fn new(kind: BoundaryKind, owner: usize, event: &'a Event) -> Self {
        let time = match kind {
            BoundaryKind::Start => event.when().start(),
            BoundaryKind::End => event.when().end(),
        };
        Self {
            time,
            kind,
            owner,
            event,
        }
    }
}

/// Maximal ranges of at least `duration` minutes during which no event
/// attended by anyone in `conflicts` is taking place, ascending by start.
///
/// Events nobody in `conflicts` attends are ignored. Zero-length events
/// occupy no minute and never block a range.
pub fn free_ranges(
    events: &[Event],
    conflicts: &HashSet<String>,
    duration: i32,
) -> Vec<TimeRange> {
    let day_open = Event::marker(TimeRange::spanning(0, 0));
    let day_close = Event::marker(TimeRange::spanning(MINUTES_PER_DAY, MINUTES_PER_DAY));
    let busy: Vec<&Event> = events
        .iter()
        .filter(|e| e.when().duration() > 0)
        .collect();

    let mut points = Vec::with_capacity(busy.len() * 2 + 2);
    points.push(BoundaryPoint::new(BoundaryKind::End, 0, &day_open));
    for (i, &event) in busy.iter().enumerate() {
        points.push(BoundaryPoint::new(BoundaryKind::Start, i + 2, event));
        points.push(BoundaryPoint::new(BoundaryKind::End, i + 2, event));
    }
    points.push(BoundaryPoint::new(BoundaryKind::Start, 1, &day_close));
    // Stable, so the markers stay first and last among points at their times.
    points.sort_by_key(|p| (p.time, p.kind));
    let last = points.len() - 1;

    let mut accepted: Vec<TimeRange> = Vec::new();
    let mut open: HashSet<usize> = HashSet::new();
    let mut end_cursor = 0;

    for (start_cursor, point) in points.iter().enumerate() {
        match point.kind {
            BoundaryKind::Start => {
                if point.event.attends_any(conflicts) {
                    open.insert(point.owner);
                }
                continue;
            }
            BoundaryKind::End => {
                open.remove(&point.owner);
                if !open.is_empty() {
                    continue;
                }
            }
        }

        // Nothing conflicting is open: widen the range up to the next
        // conflicting start, or to the end of the day.
        while end_cursor < points.len() {
            let boundary = &points[end_cursor];
            let closes = end_cursor > start_cursor
                && boundary.kind == BoundaryKind::Start
                && (end_cursor == last || boundary.event.attends_any(conflicts));
            if closes {
                let candidate = TimeRange::spanning(point.time, boundary.time);
                let extends = accepted
                    .last()
                    .is_none_or(|prev| candidate.end() > prev.end());
                if candidate.duration() >= duration && extends {
                    trace!(%candidate, "accepted free range");
                    accepted.push(candidate);
                }
                break;
            }
            end_cursor += 1;
        }
    }

    debug!(
        points = points.len(),
        conflicts = conflicts.len(),
        ranges = accepted.len(),
        "sweep finished"
    );
    accepted
}
