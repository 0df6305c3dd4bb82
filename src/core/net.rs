// src/core/net.rs
// The one place that talks HTTP. Everything else sees the `Fetch` trait,
// so the whole pipeline can run offline against canned documents.

use crate::error::ScrapeError;

const USER_AGENT: &str = concat!("hlstats_watch/", env!("CARGO_PKG_VERSION"));

/// `fetch(url) -> raw HTML text`, failing with `ScrapeError::Fetch` on any
/// network-level problem.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Blocking HTTP client. No explicit timeout is configured; the pipeline is
/// sequential and the library default applies.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }
}
