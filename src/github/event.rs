// src/github/event.rs
// =============================================================================
// Typed records for the GitHub public events feed.
//
// Only the fields we display are modelled. Every one of them is optional:
// the feed is passed through as-is, and a missing (or null) field becomes a
// placeholder at display time instead of a decoding failure. Unknown fields
// are ignored by serde.
// =============================================================================

use serde::Deserialize;

/// One record of a user's activity feed
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Event {
    /// Event type tag, e.g. "PushEvent"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub repo: Option<Repo>,
    /// Raw timestamp as sent by the API (`YYYY-MM-DDTHH:MM:SSZ`)
    ///
    /// Kept as a string so a malformed value surfaces when formatting
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: Option<String>,
}

impl Event {
    pub fn repo_name(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|repo| repo.name.as_deref())
    }
}
