//! Tests for conflict detection against a proposed meeting range.

use std::collections::HashSet;

use meeting_finder::{find_conflicts, query, Event, MeetingRequest, TimeRange};

fn range(start: i32, end: i32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

fn event(title: &str, start: i32, end: i32, attendees: &[&str]) -> Event {
    Event::new(title, range(start, end), attendees.iter().copied())
}

fn people(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn overlapping_event_with_shared_attendee_conflicts() {
    let events = vec![event("Standup", 540, 570, &["alice", "bob"])];

    let conflicts = find_conflicts(&events, &people(&["alice"]), &range(550, 600));

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].event.title(), "Standup");
    assert_eq!(conflicts[0].attendees, vec!["alice"]);
    assert_eq!(conflicts[0].overlap_minutes, 20);
}

#[test]
fn adjacent_event_is_not_a_conflict() {
    let events = vec![event("Standup", 540, 570, &["alice"])];
    assert!(find_conflicts(&events, &people(&["alice"]), &range(570, 600)).is_empty());
    assert!(find_conflicts(&events, &people(&["alice"]), &range(500, 540)).is_empty());
}

#[test]
fn overlapping_event_without_shared_attendee_is_not_a_conflict() {
    let events = vec![event("Standup", 540, 570, &["bob"])];
    assert!(find_conflicts(&events, &people(&["alice"]), &range(540, 570)).is_empty());
}

#[test]
fn conflicts_keep_input_order_and_list_clashing_attendees_sorted() {
    let events = vec![
        event("Late", 600, 660, &["carol", "alice"]),
        event("Early", 500, 560, &["dave", "bob", "alice"]),
    ];

    let conflicts = find_conflicts(&events, &people(&["alice", "bob", "carol"]), &range(540, 620));

    let titles: Vec<&str> = conflicts.iter().map(|c| c.event.title()).collect();
    assert_eq!(titles, vec!["Late", "Early"]);
    assert_eq!(conflicts[0].attendees, vec!["alice", "carol"]);
    assert_eq!(conflicts[0].overlap_minutes, 20);
    assert_eq!(conflicts[1].attendees, vec!["alice", "bob"]);
    assert_eq!(conflicts[1].overlap_minutes, 20);
}

#[test]
fn zero_length_event_is_not_a_conflict() {
    let events = vec![event("Reminder", 600, 600, &["alice"])];
    assert!(find_conflicts(&events, &people(&["alice"]), &TimeRange::WHOLE_DAY).is_empty());
}

#[test]
fn ranges_returned_by_query_have_no_conflicts() {
    let events = vec![
        event("Event 1", 480, 540, &["alice"]),
        event("Event 2", 510, 600, &["bob"]),
        event("Event 3", 900, 960, &["alice", "carol"]),
        event("Reminder", 1200, 1200, &["alice"]),
    ];
    let request = MeetingRequest::new(["alice", "bob"], 30).unwrap();

    for free in query(&events, &request) {
        assert!(
            find_conflicts(&events, request.attendees(), &free).is_empty(),
            "{free} should be conflict-free"
        );
    }
}
