//! Existing commitments on the day being scheduled.

use std::collections::HashSet;

use crate::time_range::TimeRange;

/// A named busy interval and the people attending it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: HashSet<String>,
}

impl Event {
    /// Create an event. Repeated attendee names collapse into one.
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// An untitled event nobody attends. Used to mark the edges of the day.
    pub(crate) fn marker(when: TimeRange) -> Self {
        Self {
            title: String::new(),
            when,
            attendees: HashSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    /// True iff at least one attendee of this event is in `people`.
    pub fn attends_any(&self, people: &HashSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
