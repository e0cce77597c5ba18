//! Half-open minute ranges on a single day.
//!
//! A day is the minute axis `[0, 1440)`. Every [`TimeRange`] is validated on
//! construction and immutable afterwards, so the rest of the crate never has to
//! re-check bounds.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{FinderError, Result};

/// Number of minutes in a day; the exclusive upper bound of the day axis.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A half-open interval `[start, end)` measured in minutes from midnight.
///
/// The derived ordering compares `start` first and then `end`. Use
/// [`TimeRange::cmp_start`] when only the start matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "RangeRepr")]
pub struct TimeRange {
    start: i32,
    end: i32,
}

#[derive(Serialize)]
struct RangeRepr {
    start: i32,
    end: i32,
    duration: i32,
}

impl From<TimeRange> for RangeRepr {
    fn from(range: TimeRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            duration: range.duration(),
        }
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: i32 = 0;
    /// Last valid minute of the day. The exclusive day boundary is `END_OF_DAY + 1`.
    pub const END_OF_DAY: i32 = MINUTES_PER_DAY - 1;
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build a range from its start minute and a length in minutes.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidRange` if `start < 0`, `duration < 0`, or the
    /// range would run past the end of the day.
    pub fn from_start_duration(start: i32, duration: i32) -> Result<Self> {
        Self::checked(start, start.saturating_add(duration))
    }

    /// Build a range from its bounds.
    ///
    /// When `end_inclusive` is set, `end` names the last minute inside the range
    /// and is normalized to the exclusive bound `end + 1`.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidRange` if the normalized range is not within
    /// `[0, 1440]` or ends before it starts.
    pub fn from_start_end(start: i32, end: i32, end_inclusive: bool) -> Result<Self> {
        let end = if end_inclusive {
            end.saturating_add(1)
        } else {
            end
        };
        Self::checked(start, end)
    }

    fn checked(start: i32, end: i32) -> Result<Self> {
        if start < Self::START_OF_DAY || end < start || end > MINUTES_PER_DAY {
            return Err(FinderError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range between two boundary times already known to be ordered and in bounds.
    pub(crate) fn spanning(start: i32, end: i32) -> Self {
        debug_assert!(
            (Self::START_OF_DAY..=end).contains(&start) && end <= MINUTES_PER_DAY,
            "unordered span [{start}, {end})"
        );
        Self { start, end }
    }

    /// Inclusive start minute.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// True iff `self.start < other.end && other.start < self.end`.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap. An empty
    /// range overlaps any range that strictly surrounds its point.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `point` lies in `[start, end)`.
    pub fn contains(&self, point: i32) -> bool {
        self.start <= point && point < self.end
    }

    /// True iff `other` lies entirely within this range.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Compare by start only; ranges with equal starts compare equal.
    pub fn cmp_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start)
    }

    /// Compare by end only; ranges with equal ends compare equal.
    pub fn cmp_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
