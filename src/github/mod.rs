// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Typed event records (event.rs)
// - Fetching a user's public events feed (fetch.rs)
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

pub mod event;
pub mod fetch;

// Re-export what the pipeline uses so callers can write `github::Event`
pub use event::Event;
pub use fetch::{fetch_activity, EventSource, GithubClient};
