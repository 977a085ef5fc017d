// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The surface is intentionally small:
//   github-activity <USERNAME> [--event <TYPE>] [--limit <N>] [--save]
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For arguments the user may leave out
// =============================================================================

use clap::Parser;

/// Default number of rows shown (and saved)
pub const DEFAULT_LIMIT: i64 = 10;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "github-activity",
    version,
    about = "Show the recent public activity of a GitHub user",
    long_about = "github-activity fetches the public event feed of a GitHub user, \
                  optionally filters it by event type and prints it as a table. \
                  With --save the table is also written to activity_log.txt."
)]
pub struct Cli {
    /// GitHub username whose activity should be shown
    ///
    /// This is a positional argument (required, no flag needed)
    pub username: String,

    /// Only show events of this type (e.g., PushEvent, CreateEvent)
    ///
    /// The comparison is exact and case-sensitive
    #[arg(long = "event", value_name = "TYPE")]
    pub event_type: Option<String>,

    /// Maximum number of events to show (default: 10)
    ///
    /// Zero or a negative number shows no rows
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Also save the activity table to activity_log.txt
    #[arg(long)]
    pub save: bool,
}
