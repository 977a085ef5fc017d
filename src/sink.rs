// src/sink.rs
// =============================================================================
// Where the activity table ends up: the terminal or a text file.
//
// The file path formats its own rows from the events it is given, so the
// caller decides which events get saved.
//
// File writes never abort the program. A failure is reported and the run
// carries on to a normal exit.
// =============================================================================

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::activity::{format_rows, render_table, Activity, DisplayRow, TimestampError};
use crate::github::Event;

/// File written by --save, relative to the working directory
pub const DEFAULT_FILENAME: &str = "activity_log.txt";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

/// Prints the table (header included, even with no rows)
pub fn write_to_stdout(rows: &[DisplayRow]) {
    print!("{}", render_table(rows));
}

/// Prints whatever summarize() decided should be shown
pub fn display_activity(activity: &Activity) {
    if *activity != Activity::NoEvents {
        println!("\nRecent activity:");
    }

    match activity {
        Activity::Rows(rows) => write_to_stdout(rows),
        other => {
            if let Some(message) = other.message() {
                println!("{}", message);
            }
        }
    }
}

/// Writes header, separator and up to `limit` rows to `path`
///
/// The file is created or truncated; a timestamp error is raised before
/// the file is touched.
pub fn write_to_file(
    events: &[Event],
    path: impl AsRef<Path>,
    limit: i64,
) -> Result<(), SaveError> {
    let rows = format_rows(events, limit)?;

    // The writer is dropped (and the file closed) on every return path
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(render_table(&rows).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Saves the table and tells the user how it went
///
/// Returns true if the file was written.
pub fn save_activity(events: &[Event], path: &Path, limit: i64) -> bool {
    match write_to_file(events, path, limit) {
        Ok(()) => {
            info!(path = %path.display(), "activity saved");
            println!("Activity saved to file '{}'.", path.display());
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to save activity");
            println!("Error saving activity to file: {}", e);
            false
        }
    }
}
