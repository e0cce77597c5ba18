//! JSON input documents and clock-time parsing.
//!
//! The CLI reads one document per invocation:
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["alice", "bob"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["carol"], "duration": 30 }
//! }
//! ```
//!
//! Times are either minute offsets from midnight (`570`) or 24-hour clock
//! strings (`"09:30"`). `"24:00"` names the exclusive end of the day.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use meeting_finder::{Event, MeetingRequest, TimeRange, MINUTES_PER_DAY};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    Minutes(i32),
    Clock(String),
}

impl TimeInput {
    fn minutes(&self) -> Result<i32> {
        match self {
            TimeInput::Minutes(m) => Ok(*m),
            TimeInput::Clock(s) => parse_clock(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventInput {
    #[serde(default)]
    pub title: String,
    pub start: TimeInput,
    pub end: Option<TimeInput>,
    pub duration: Option<i32>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestInput {
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub optional_attendees: Vec<String>,
    pub duration: i32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: RequestInput,
}

impl Document {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid input document")
    }

    pub fn events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, input)| {
                input
                    .to_event()
                    .with_context(|| format!("Invalid event #{} ('{}')", i + 1, input.title))
            })
            .collect()
    }

    pub fn request(&self) -> Result<MeetingRequest> {
        let req = &self.request;
        let request = MeetingRequest::new(req.attendees.iter().cloned(), req.duration)
            .context("Invalid meeting request")?;
        Ok(request.with_optional_attendees(req.optional_attendees.iter().cloned()))
    }
}

impl EventInput {
    fn to_event(&self) -> Result<Event> {
        let start = self.start.minutes()?;
        let when = match (&self.end, self.duration) {
            (Some(end), None) => TimeRange::from_start_end(start, end.minutes()?, false)?,
            (None, Some(duration)) => TimeRange::from_start_duration(start, duration)?,
            (Some(_), Some(_)) => bail!("give either 'end' or 'duration', not both"),
            (None, None) => bail!("missing 'end' or 'duration'"),
        };
        Ok(Event::new(&self.title, when, self.attendees.iter().cloned()))
    }
}

/// Parse a time given on the command line: minutes (`570`) or a clock time (`09:30`).
pub fn parse_time_arg(s: &str) -> Result<i32> {
    match s.trim().parse::<i32>() {
        Ok(minutes) => Ok(minutes),
        Err(_) => parse_clock(s),
    }
}

/// Parse an `HH:MM` clock string into minutes since midnight.
pub fn parse_clock(s: &str) -> Result<i32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .with_context(|| format!("Invalid time '{}': expected HH:MM or minutes", s))?;
    Ok((time.hour() * 60 + time.minute()) as i32)
}
