//! `find-meeting` CLI — find free meeting times in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Free ranges for the request in day.json, as text
//! find-meeting query -i day.json
//!
//! # Same, as JSON, reading the document from stdin
//! cat day.json | find-meeting query --format json
//!
//! # Ignore optional attendees entirely
//! find-meeting query -i day.json --mandatory-only
//!
//! # Which events clash with 09:00-10:00 for the request's attendees?
//! find-meeting conflicts -i day.json --start 09:00 --end 10:00
//!
//! # Show the sweep's debug output on stderr
//! find-meeting --log-level debug query -i day.json
//! ```

mod input;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::{find_conflicts, query_mandatory_only, query_with_pass, Conflict, TimeRange};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::{parse_time_arg, Document};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find free meeting times in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter for stderr output (e.g. "debug"); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every free range long enough for the requested meeting
    Query {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Only consider mandatory attendees
        #[arg(long)]
        mandatory_only: bool,
    },
    /// List the events that clash with a proposed meeting time
    Conflicts {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Start of the proposed meeting (HH:MM or minutes)
        #[arg(long)]
        start: String,
        /// Exclusive end of the proposed meeting (HH:MM or minutes)
        #[arg(long)]
        end: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            mandatory_only,
        } => {
            let doc = Document::parse(&read_input(input.as_deref())?)?;
            let events = doc.events()?;
            let request = doc.request()?;
            info!(
                events = events.len(),
                duration = request.duration(),
                "running query"
            );

            let availability = if mandatory_only {
                query_mandatory_only(&events, &request)
            } else {
                query_with_pass(&events, &request)
            };

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&availability)?,
                Format::Text => render_ranges(&availability.ranges),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Conflicts {
            input,
            output,
            start,
            end,
            format,
        } => {
            let doc = Document::parse(&read_input(input.as_deref())?)?;
            let events = doc.events()?;
            let request = doc.request()?;
            let proposed =
                TimeRange::from_start_end(parse_time_arg(&start)?, parse_time_arg(&end)?, false)
                    .context("Invalid proposed meeting time")?;

            let conflicts = find_conflicts(&events, &request.all_attendees(), &proposed);
            info!(%proposed, conflicts = conflicts.len(), "checked proposed time");

            let rendered = match format {
                Format::Json => {
                    let dtos: Vec<ConflictDto> = conflicts.iter().map(ConflictDto::from).collect();
                    serde_json::to_string_pretty(&dtos)?
                }
                Format::Text => render_conflicts(&conflicts),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber so stdout stays machine-readable.
///
/// `--log-level` wins over `RUST_LOG`; with neither, only warnings are shown.
fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: '{}'", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

#[derive(Serialize)]
struct ConflictDto<'a> {
    title: &'a str,
    when: TimeRange,
    attendees: &'a [&'a str],
    overlap_minutes: i32,
}

impl<'a> From<&'a Conflict<'a>> for ConflictDto<'a> {
    fn from(c: &'a Conflict<'a>) -> Self {
        Self {
            title: c.event.title(),
            when: c.event.when(),
            attendees: &c.attendees,
            overlap_minutes: c.overlap_minutes,
        }
    }
}

fn render_ranges(ranges: &[TimeRange]) -> String {
    if ranges.is_empty() {
        return "no available time\n".to_string();
    }
    ranges
        .iter()
        .map(|r| format!("{} ({} min)\n", r, r.duration()))
        .collect()
}

fn render_conflicts(conflicts: &[Conflict<'_>]) -> String {
    if conflicts.is_empty() {
        return "no conflicts\n".to_string();
    }
    conflicts
        .iter()
        .map(|c| {
            let title = if c.event.title().is_empty() {
                "(untitled)"
            } else {
                c.event.title()
            };
            format!(
                "{} {} [{}] overlaps {} min\n",
                c.event.when(),
                title,
                c.attendees.join(", "),
                c.overlap_minutes
            )
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
