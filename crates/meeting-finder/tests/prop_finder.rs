//! Property-based tests for the meeting finder using proptest.
//!
//! These check invariants that must hold for *any* day of events, not just the
//! hand-written scenarios in `finder_tests.rs`.

use std::collections::HashSet;

use meeting_finder::{free_ranges, query, query_with_pass, Event, MeetingRequest, Pass, TimeRange};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 4] = ["alice", "bob", "carol", "dave"];

fn arb_people() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(PEOPLE.to_vec(), 0..=PEOPLE.len())
}

/// Events up to five hours long, clipped to the end of the day.
fn arb_event() -> impl Strategy<Value = Event> {
    (0i32..=1440, 0i32..=300, arb_people()).prop_map(|(start, len, attendees)| {
        let when = TimeRange::from_start_end(start, (start + len).min(1440), false).unwrap();
        Event::new("busy", when, attendees)
    })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..16)
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_people(), arb_people(), 0i32..=600).prop_map(|(mandatory, optional, duration)| {
        MeetingRequest::new(mandatory, duration)
            .unwrap()
            .with_optional_attendees(optional)
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn conflict_set(request: &MeetingRequest, pass: Pass) -> HashSet<String> {
    match pass {
        Pass::AllAttendees => request.all_attendees(),
        Pass::MandatoryOnly | Pass::None => request.attendees().clone(),
    }
}

/// Minute-by-minute reference: maximal runs of free minutes at least
/// `duration` long.
fn brute_force(events: &[Event], conflicts: &HashSet<String>, duration: i32) -> Vec<TimeRange> {
    let mut busy = [false; 1440];
    for event in events.iter().filter(|e| e.attends_any(conflicts)) {
        for minute in event.when().start()..event.when().end() {
            busy[minute as usize] = true;
        }
    }

    let mut runs = Vec::new();
    let mut minute = 0;
    while minute < 1440 {
        if busy[minute as usize] {
            minute += 1;
            continue;
        }
        let start = minute;
        while minute < 1440 && !busy[minute as usize] {
            minute += 1;
        }
        if minute - start >= duration {
            runs.push(TimeRange::from_start_end(start, minute, false).unwrap());
        }
    }
    runs
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ranges_are_long_enough(events in arb_events(), request in arb_request()) {
        for r in query(&events, &request) {
            prop_assert!(r.duration() >= request.duration(), "{} shorter than {}", r, request.duration());
        }
    }

    #[test]
    fn ranges_are_ordered_and_disjoint(events in arb_events(), request in arb_request()) {
        let ranges = query(&events, &request);
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].start() < pair[1].start());
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn ranges_avoid_conflicting_events(events in arb_events(), request in arb_request()) {
        let availability = query_with_pass(&events, &request);
        let conflicts = conflict_set(&request, availability.pass);
        for r in &availability.ranges {
            let busy = events
                .iter()
                .filter(|e| e.when().duration() > 0 && e.attends_any(&conflicts));
            for e in busy {
                prop_assert!(!r.overlaps(&e.when()), "{} overlaps {}", r, e.when());
            }
        }
    }

    #[test]
    fn all_attendee_ranges_win_when_present(events in arb_events(), request in arb_request()) {
        let everyone = free_ranges(&events, &request.all_attendees(), request.duration());
        let availability = query_with_pass(&events, &request);
        if everyone.is_empty() {
            prop_assert_ne!(availability.pass, Pass::AllAttendees);
            prop_assert_eq!(
                availability.ranges,
                free_ranges(&events, request.attendees(), request.duration())
            );
        } else {
            prop_assert_eq!(availability.pass, Pass::AllAttendees);
            prop_assert_eq!(availability.ranges, everyone);
        }
    }

    #[test]
    fn query_is_idempotent(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(query(&events, &request), query(&events, &request));
    }

    #[test]
    fn input_order_does_not_matter(events in arb_events(), request in arb_request()) {
        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(query(&events, &request), query(&reversed, &request));
    }

    #[test]
    fn sweep_matches_minute_by_minute_scan(
        events in arb_events(),
        conflicts in arb_people(),
        duration in 1i32..=600,
    ) {
        let conflicts: HashSet<String> = conflicts.into_iter().map(String::from).collect();
        prop_assert_eq!(
            free_ranges(&events, &conflicts, duration),
            brute_force(&events, &conflicts, duration)
        );
    }
}
