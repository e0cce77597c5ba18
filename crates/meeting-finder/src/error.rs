//! Error types for meeting-finder operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    /// A time range would leave the `[0, 1440]` minute axis or end before it starts.
    /// The bounds are reported with an exclusive end.
    #[error("Invalid time range: [{start}, {end})")]
    InvalidRange { start: i32, end: i32 },

    /// A meeting request asked for a negative number of minutes.
    #[error("Invalid meeting duration: {0} minutes")]
    InvalidDuration(i32),
}

pub type Result<T> = std::result::Result<T, FinderError>;
