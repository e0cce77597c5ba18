//! The meeting to be scheduled.

use std::collections::HashSet;

use crate::error::{FinderError, Result};

/// How long a meeting must last and who should be there.
///
/// Mandatory and optional attendees are expected to be disjoint but may share
/// names; a shared name counts once in [`MeetingRequest::all_attendees`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRequest {
    attendees: HashSet<String>,
    optional_attendees: HashSet<String>,
    duration: i32,
}

impl MeetingRequest {
    /// Create a request with mandatory attendees only.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidDuration` if `duration` is negative.
    pub fn new<I, S>(attendees: I, duration: i32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if duration < 0 {
            return Err(FinderError::InvalidDuration(duration));
        }
        Ok(Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration,
        })
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> HashSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }

    /// Required length of the meeting in minutes.
    pub fn duration(&self) -> i32 {
        self.duration
    }
}
