// src/activity/mod.rs
// =============================================================================
// This module turns a fetched event feed into something we can show.
//
// Submodules:
// - filter: keeps only the events of a requested type
// - table: builds display rows and renders the fixed-column table
//
// summarize() runs both steps and tells the caller which of the three
// possible outcomes it got: nothing fetched, nothing matching, or rows.
// =============================================================================

mod filter;
mod table;

pub use filter::filter_events;
pub use table::{format_rows, render_table, DisplayRow, TimestampError};

use tracing::debug;

use crate::github::Event;

/// Shown in the "no events of this type" message
pub const EXAMPLE_EVENT_TYPES: &str = "PushEvent, CreateEvent, etc.";

/// What the display path should print for a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    /// The feed itself was empty
    NoEvents,
    /// The feed had events, but none of the requested type
    NoMatches { event_type: String },
    /// Rows to print, already limited
    Rows(Vec<DisplayRow>),
}

impl Activity {
    /// The explanatory message, for the outcomes that have no table
    pub fn message(&self) -> Option<String> {
        match self {
            Activity::NoEvents => Some("No recent events found.".to_string()),
            Activity::NoMatches { event_type } => Some(format!(
                "No events of type '{}' found. Valid types include: {}",
                event_type, EXAMPLE_EVENT_TYPES
            )),
            Activity::Rows(_) => None,
        }
    }
}

/// Filters, limits and formats a feed for display
pub fn summarize(
    events: &[Event],
    event_type: Option<&str>,
    limit: i64,
) -> Result<Activity, TimestampError> {
    if events.is_empty() {
        return Ok(Activity::NoEvents);
    }

    let filtered = filter_events(events, event_type);
    debug!(total = events.len(), matching = filtered.len(), ?event_type, "filtered events");

    if filtered.is_empty() {
        return Ok(Activity::NoMatches {
            // filtered can only be empty here if a type was requested
            event_type: event_type.unwrap_or_default().to_string(),
        });
    }

    Ok(Activity::Rows(format_rows(filtered, limit)?))
}
