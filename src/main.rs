// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's public events from GitHub
// 3. Filter, limit and print them as a table
// 4. Optionally save the table to activity_log.txt
//
// Exit codes:
//   0 = finished, including when the fetch or the save failed (the reason
//       has already been printed)
//   2 = unexpected error, e.g. a timestamp in a format we can't read
//
// Rust concepts used:
// - async/await: The HTTP request is async (reqwest + tokio)
// - Result<T, E>: For error handling (T = success type, E = error type)
// - let-else: Bail out early when there is nothing to show
// =============================================================================

// Module declarations - tells Rust about our other source files
mod activity;      // src/activity/ - filtering and table formatting
mod cli;           // src/cli.rs - command-line parsing
mod github;        // src/github/ - GitHub API access
mod sink;          // src/sink.rs - stdout and file output

use anyhow::{Context, Result};
use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use github::{EventSource, GithubClient};
use std::path::Path;
use tracing_subscriber::EnvFilter;

// One request, no background work: a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr and are silent unless RUST_LOG asks for them,
// e.g. RUST_LOG=github_activity=debug
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    let client = GithubClient::new().context("failed to create HTTP client")?;

    run_with(&cli, &client, Path::new(sink::DEFAULT_FILENAME)).await
}

// The whole pipeline: fetch, display, and optionally save to `save_path`
async fn run_with(cli: &Cli, source: &dyn EventSource, save_path: &Path) -> Result<i32> {
    println!("Fetching recent activity for user: {}", cli.username);

    // fetch_activity has already explained any failure
    let Some(events) = github::fetch_activity(source, &cli.username).await else {
        return Ok(0);
    };

    let activity = activity::summarize(&events, cli.event_type.as_deref(), cli.limit)?;
    sink::display_activity(&activity);

    if cli.save {
        // The saved table is built from the whole feed, not the filtered one
        sink::save_activity(&events, save_path, cli.limit);
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use github::event::Repo;
    use github::fetch::FetchError;
    use github::Event;
    use std::fs;
    use tempdir::TempDir;

    // Serves a fixed feed, or answers every user with "not found"
    enum StaticFeed {
        Events(Vec<Event>),
        NotFound,
    }

    #[async_trait]
    impl EventSource for StaticFeed {
        async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
            match self {
                StaticFeed::Events(events) => Ok(events.clone()),
                StaticFeed::NotFound => Err(FetchError::NotFound {
                    username: username.to_string(),
                }),
            }
        }
    }

    fn event(kind: &str, repo: &str, created_at: &str) -> Event {
        Event {
            kind: Some(kind.to_string()),
            repo: Some(Repo {
                name: Some(repo.to_string()),
            }),
            created_at: Some(created_at.to_string()),
        }
    }

    fn cli(event_type: Option<&str>, limit: i64, save: bool) -> Cli {
        Cli {
            username: "octocat".to_string(),
            event_type: event_type.map(str::to_string),
            limit,
            save,
        }
    }

    fn data_rows(written: &str) -> Vec<&str> {
        written.lines().skip(2).collect()
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_save() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);

        let code = run_with(&cli(None, 10, true), &StaticFeed::NotFound, &path)
            .await
            .unwrap();

        assert_eq!(code, 0);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_ignores_event_filter() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);
        let feed = StaticFeed::Events(vec![
            event("PushEvent", "a/b", "2024-01-02T00:00:00Z"),
            event("PushEvent", "a/c", "2024-01-01T00:00:00Z"),
        ]);

        let code = run_with(&cli(Some("CreateEvent"), 10, true), &feed, &path)
            .await
            .unwrap();
        assert_eq!(code, 0);

        let written = fs::read_to_string(&path).unwrap();
        let rows = data_rows(&written);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.starts_with("PushEvent")));
    }

    #[tokio::test]
    async fn test_save_takes_limit_from_unfiltered_feed() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);
        let feed = StaticFeed::Events(vec![
            event("CreateEvent", "a/b", "2024-01-03T00:00:00Z"),
            event("PushEvent", "a/b", "2024-01-02T00:00:00Z"),
            event("PushEvent", "a/c", "2024-01-01T00:00:00Z"),
        ]);

        run_with(&cli(Some("PushEvent"), 2, true), &feed, &path)
            .await
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let rows = data_rows(&written);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("CreateEvent"));
        assert!(rows[1].starts_with("PushEvent"));
    }

    #[tokio::test]
    async fn test_empty_feed_saves_header_only() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);

        run_with(&cli(None, 10, true), &StaticFeed::Events(Vec::new()), &path)
            .await
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(data_rows(&written).is_empty());
    }

    #[tokio::test]
    async fn test_no_save_flag_writes_nothing() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);
        let feed = StaticFeed::Events(vec![event("PushEvent", "a/b", "2024-01-01T00:00:00Z")]);

        run_with(&cli(None, 10, false), &feed, &path).await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_malformed_timestamp_fails_the_run() {
        let dir = TempDir::new("github-activity").unwrap();
        let path = dir.path().join(sink::DEFAULT_FILENAME);
        let feed = StaticFeed::Events(vec![event("PushEvent", "a/b", "last tuesday")]);

        let result = run_with(&cli(None, 10, true), &feed, &path).await;

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
