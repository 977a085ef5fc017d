// src/activity/table.rs
// =============================================================================
// Turns events into display rows and renders them as a fixed-column table.
//
// Table layout:
//   <Event Type:20> <Repository:30> <Date:20>
//   ---------------------------------------------------------------------- (70)
//   <one row per event, left-justified, same widths>
//
// Values wider than their column are not truncated; they just push the
// following columns to the right.
//
// Rust concepts:
// - chrono: parse a timestamp with one pattern, print it with another
// - Iterator adapters: take() for the row limit
// =============================================================================

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::github::Event;

pub const UNKNOWN_EVENT: &str = "unknown event";
pub const UNKNOWN_REPOSITORY: &str = "unknown repository";
pub const UNKNOWN_DATE: &str = "unknown date";

/// Width of the dashed line under the column titles
pub const SEPARATOR_WIDTH: usize = 70;

// Timestamps arrive as UTC with a literal Z, e.g. 2024-03-05T14:30:00Z
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Error)]
#[error("invalid timestamp '{value}': {source}")]
pub struct TimestampError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// The three strings shown for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub event_type: String,
    pub repository: String,
    pub date: String,
}

impl DisplayRow {
    pub fn from_event(event: &Event) -> Result<Self, TimestampError> {
        let date = match event.created_at.as_deref() {
            Some(raw) => format_date(raw)?,
            None => UNKNOWN_DATE.to_string(),
        };

        Ok(Self {
            event_type: event.kind.as_deref().unwrap_or(UNKNOWN_EVENT).to_string(),
            repository: event.repo_name().unwrap_or(UNKNOWN_REPOSITORY).to_string(),
            date,
        })
    }
}

/// Re-renders an API timestamp as `DD-MM-YYYY HH:MM:SS`
pub fn format_date(raw: &str) -> Result<String, TimestampError> {
    let parsed =
        NaiveDateTime::parse_from_str(raw, INPUT_FORMAT).map_err(|source| TimestampError {
            value: raw.to_string(),
            source,
        })?;
    Ok(parsed.format(DISPLAY_FORMAT).to_string())
}

/// Builds rows for at most `limit` events, counted from the start
pub fn format_rows<'a, I>(events: I, limit: i64) -> Result<Vec<DisplayRow>, TimestampError>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .take(row_count(limit))
        .map(DisplayRow::from_event)
        .collect()
}

fn row_count(limit: i64) -> usize {
    if limit <= 0 {
        0
    } else {
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

/// Header, separator and one line per row, each terminated by a newline
pub fn render_table(rows: &[DisplayRow]) -> String {
    let mut out = format_line("Event Type", "Repository", "Date");
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for row in rows {
        out.push_str(&format_line(&row.event_type, &row.repository, &row.date));
    }

    out
}

fn format_line(event_type: &str, repository: &str, date: &str) -> String {
    format!("{:<20} {:<30} {:<20}\n", event_type, repository, date)
}
