//! `freetime` CLI — free/busy queries over JSON calendars.
//!
//! A calendar is a JSON array of `{"begin": ..., "end": ...}` objects holding
//! RFC 3339 datetimes (naive `YYYY-MM-DDTHH:MM:SS` is read as UTC).
//!
//! ## Usage
//!
//! ```sh
//! # Canonical form of one calendar (stdin → stdout)
//! cat alice.json | freetime normalize
//!
//! # Time when both calendars are busy
//! freetime intersect alice.json bob.json --normalize
//!
//! # Time when anyone is busy
//! freetime busy alice.json bob.json
//!
//! # Common free slots of at least 30 minutes in a working day
//! freetime free alice.json bob.json \
//!   --start 2026-03-02T09:00:00Z --end 2026-03-02T17:00:00Z --min-duration 30
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use freetime_engine::{freebusy, Agenda, FreeSlot, Interval};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "freetime",
    version,
    about = "Free/busy queries over JSON calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Diagnostics level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "FREETIME_LOG", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a calendar and merge its overlapping entries
    Normalize {
        /// Input calendar (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Pairwise overlaps between two calendars
    Intersect {
        /// First calendar
        first: String,
        /// Second calendar
        second: String,
        /// Merge the overlapping fragments of the result
        #[arg(long)]
        normalize: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Time when at least one calendar is busy
    Busy {
        /// Calendars to combine
        #[arg(required = true)]
        calendars: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Common free slots of all calendars inside a window
    Free {
        /// Calendars whose busy time is excluded
        #[arg(required = true)]
        calendars: Vec<String>,
        /// Window start (RFC 3339 or naive UTC)
        #[arg(long)]
        start: String,
        /// Window end (RFC 3339 or naive UTC)
        #[arg(long)]
        end: String,
        /// Drop slots shorter than this many minutes
        #[arg(long)]
        min_duration: Option<i64>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// JSON shapes
// ---------------------------------------------------------------------------

/// One calendar entry as read from disk.
#[derive(Deserialize)]
struct IntervalInput {
    begin: String,
    end: String,
}

#[derive(Serialize)]
struct IntervalDto {
    begin: String,
    end: String,
}

impl From<&Interval<DateTime<Utc>>> for IntervalDto {
    fn from(interval: &Interval<DateTime<Utc>>) -> Self {
        Self {
            begin: interval.begin().to_rfc3339(),
            end: interval.end().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct FreeSlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&FreeSlot> for FreeSlotDto {
    fn from(slot: &FreeSlot) -> Self {
        Self {
            start: slot.start.to_rfc3339(),
            end: slot.end.to_rfc3339(),
            duration_minutes: slot.duration_minutes,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Normalize { input, output } => {
            let json = read_input(input.as_deref())?;
            let calendar = parse_calendar(&json).with_context(|| {
                format!("Failed to parse calendar: {}", describe(input.as_deref()))
            })?;
            info!(intervals = calendar.len(), "normalizing");
            write_agenda(output.as_deref(), &calendar.normalized())?;
        }
        Commands::Intersect {
            first,
            second,
            normalize,
            output,
        } => {
            let a = load_calendar(&first)?;
            let b = load_calendar(&second)?;
            let mut common = a.intersect(&b);
            if normalize {
                common.normalize();
            }
            info!(overlaps = common.len(), "intersected calendars");
            write_agenda(output.as_deref(), &common)?;
        }
        Commands::Busy { calendars, output } => {
            let calendars = load_calendars(&calendars)?;
            write_agenda(output.as_deref(), &freebusy::combined_busy(&calendars))?;
        }
        Commands::Free {
            calendars,
            start,
            end,
            min_duration,
            output,
        } => {
            let calendars = load_calendars(&calendars)?;
            let window = Interval::new(parse_datetime(&start)?, parse_datetime(&end)?)
                .context("Window start must not be after window end")?;

            let free = freebusy::common_free(&calendars, &window);
            let min_duration = min_duration.unwrap_or(0);
            let slots: Vec<FreeSlotDto> = free
                .iter()
                .map(FreeSlot::from)
                .filter(|slot| slot.duration_minutes >= min_duration)
                .map(|slot| FreeSlotDto::from(&slot))
                .collect();

            info!(slots = slots.len(), "found free slots");
            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset) and naive `%Y-%m-%dT%H:%M:%S`, read as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime '{}'", s))
}

fn parse_calendar(json: &str) -> Result<Agenda<DateTime<Utc>>> {
    let inputs: Vec<IntervalInput> =
        serde_json::from_str(json).context("Invalid calendar JSON")?;

    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let begin = parse_datetime(&input.begin)?;
            let end = parse_datetime(&input.end)?;
            Interval::new(begin, end)
                .with_context(|| format!("Entry {} ends before it begins", index))
        })
        .collect()
}

fn load_calendar(path: &str) -> Result<Agenda<DateTime<Utc>>> {
    let json = read_input(Some(path))?;
    parse_calendar(&json).with_context(|| format!("Failed to parse calendar: {}", path))
}

fn load_calendars(paths: &[String]) -> Result<Vec<Agenda<DateTime<Utc>>>> {
    paths.iter().map(|path| load_calendar(path)).collect()
}

fn describe(path: Option<&str>) -> &str {
    path.unwrap_or("<stdin>")
}

fn write_agenda(path: Option<&str>, agenda: &Agenda<DateTime<Utc>>) -> Result<()> {
    let dtos: Vec<IntervalDto> = agenda.iter().map(IntervalDto::from).collect();
    let json = serde_json::to_string_pretty(&dtos)?;
    write_output(path, &json)
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
            println!("{}", content);
        }
    }
    Ok(())
}
