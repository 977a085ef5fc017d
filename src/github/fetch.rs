// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public events from the GitHub REST API.
//
// Strategy:
// - Build the URL as <base>/<username>/events
// - Make exactly one GET request (no auth, no retries, no pagination)
// - Map the HTTP status to our error taxonomy before touching the body
// - Decode the JSON array into Event records
//
// The network access sits behind the EventSource trait so the rest of the
// program (and the tests) never need a real connection.
//
// Rust concepts:
// - Traits: an interface the fake and the real client both implement
// - thiserror: derive Display/Error for our error enum
// - async functions: For network I/O
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::event::Event;

/// Base of the users API; the username is appended directly
pub const API_BASE_URL: &str = "https://api.github.com/users/";

const EVENTS_SUFFIX: &str = "/events";

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Everything that can go wrong while fetching the feed
///
/// The Display text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error: User '{username}' not found.")]
    NotFound { username: String },

    #[error("Error: Rate limit reached. Try again later.")]
    RateLimited,

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Anything that can produce the event feed of a user
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError>;
}

/// EventSource backed by the real GitHub API
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Same as `new` but against another API host (must end with `/`)
    pub fn with_base_url(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        // No timeout: the request blocks until the server answers or fails
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn events_url(&self, username: &str) -> String {
        format!("{}{}{}", self.base_url, username, EVENTS_SUFFIX)
    }
}

#[async_trait]
impl EventSource for GithubClient {
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.events_url(username);
        debug!(%url, "requesting events");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");
        check_status(status, username)?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        parse_events(&body)
    }
}

// Maps an HTTP status to Ok (2xx) or the matching FetchError
pub fn check_status(status: StatusCode, username: &str) -> Result<(), FetchError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(FetchError::NotFound {
            username: username.to_string(),
        }),
        StatusCode::FORBIDDEN => Err(FetchError::RateLimited),
        other => Err(FetchError::HttpStatus(other.as_u16())),
    }
}

pub fn parse_events(body: &str) -> Result<Vec<Event>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Unexpected(e.to_string()))
}

// reqwest errors from send() are transport failures, except a request that
// could not even be built (e.g. an unparsable URL)
fn classify_request_error(error: reqwest::Error) -> FetchError {
    if error.is_builder() {
        FetchError::Unexpected(error.to_string())
    } else {
        FetchError::Network(root_cause(&error))
    }
}

// reqwest wraps the interesting reason (DNS, refused, TLS...) a few levels deep
fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut cause = error;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}

/// Fetches the feed and reports any failure to the user
///
/// Returns None on every failure branch, after printing its message.
pub async fn fetch_activity(source: &dyn EventSource, username: &str) -> Option<Vec<Event>> {
    match source.fetch_events(username).await {
        Ok(events) => {
            info!(username, count = events.len(), "fetched events");
            Some(events)
        }
        Err(e) => {
            warn!(username, error = ?e, "failed to fetch events");
            println!("{}", e);
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - We want to use `&dyn EventSource` (a trait object)
//    - async fn in a trait object needs the future boxed
//    - async-trait does that boxing for us
//
// 2. Why return Option from fetch_activity?
//    - The caller only needs to know "do we have data or not"
//    - The error has already been explained to the user here
// -----------------------------------------------------------------------------
