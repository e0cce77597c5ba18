//! # meeting-finder
//!
//! Find the times in a day when a meeting can take place.
//!
//! Given the day's existing events, each attended by a set of people, and a
//! [`MeetingRequest`] naming a duration plus mandatory and optional attendees,
//! [`query`] returns every maximal free range long enough for the meeting.
//! Ranges that suit the optional attendees too are preferred; when there are
//! none, the mandatory attendees alone decide.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let standup = Event::new("Standup", TimeRange::from_start_end(540, 570, false).unwrap(), ["alice"]);
//! let request = MeetingRequest::new(["alice"], 30).unwrap();
//!
//! let free = query(&[standup], &request);
//! assert_eq!(free, vec![
//!     TimeRange::from_start_end(0, 540, false).unwrap(),
//!     TimeRange::from_start_end(570, 1440, false).unwrap(),
//! ]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute ranges on the day axis
//! - [`event`] — Busy intervals and their attendees
//! - [`request`] — The meeting being scheduled
//! - [`finder`] — Boundary sweep and the all-attendees / mandatory-only fallback
//! - [`conflict`] — Events that clash with a proposed range
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod finder;
pub mod request;
pub mod time_range;

pub use conflict::{find_conflicts, Conflict};
pub use error::FinderError;
pub use event::Event;
pub use finder::{free_ranges, query, query_mandatory_only, query_with_pass, Availability, Pass};
pub use request::MeetingRequest;
pub use time_range::{TimeRange, MINUTES_PER_DAY};
