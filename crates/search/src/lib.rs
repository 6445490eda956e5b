//! YouTube first-result lookup by scraping the search results page
//!
//! No API key: the results page HTML is fetched with a browser-like
//! User-Agent and scanned for `watch?v=` video ids. This trades
//! robustness against markup changes for zero credential management;
//! the caller treats "no result" as a non-fatal outcome.

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use trackshare_core::{SearchProvider, ShareError};
use tracing::{debug, warn};

const RESULTS_URL: &str = "https://www.youtube.com/results";
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Video ids are 11 characters of `[A-Za-z0-9_-]` after the watch marker.
fn watch_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"watch\?v=([A-Za-z0-9_-]{11})").unwrap())
}

/// Ids in order of first appearance in the body, duplicates collapsed.
pub fn extract_watch_ids(body: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for captures in watch_id_pattern().captures_iter(body) {
        let id = &captures[1];
        if !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Canonical watch URL for the first id found in the body, if any.
pub fn first_watch_url(body: &str) -> Option<String> {
    extract_watch_ids(body)
        .into_iter()
        .next()
        .map(|id| format!("{}{}", WATCH_URL_BASE, id))
}

/// Unauthenticated YouTube search client.
pub struct YoutubeSearch {
    client: Client,
    base_url: String,
}

impl YoutubeSearch {
    /// Build a client with the given request timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).context("Invalid user agent")?,
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: RESULTS_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for YoutubeSearch {
    /// Single best-effort attempt: no retry, no backoff. A non-success
    /// status or a body without ids is `Ok(None)`; only network-level
    /// failures are errors.
    async fn resolve(&self, query: &str) -> Result<Option<String>, ShareError> {
        let url = format!("{}?search_query={}", self.base_url, urlencoding::encode(query));
        debug!("search request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ShareError::SearchTransport(e.to_string()))?;

        if !response.status().is_success() {
            warn!("search returned status {}", response.status());
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ShareError::SearchTransport(e.to_string()))?;

        let result = first_watch_url(&body);
        if result.is_none() {
            debug!("no watch ids in {} byte response", body.len());
        }
        Ok(result)
    }
}
