// src/core/net.rs
// HTTP GET behind a narrow trait so parsers and the runner can be driven
// from captured pages in tests.

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Outcome of a GET that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetched {
    Page(String),
    /// HTTP 404
    Missing,
}

pub trait Fetch {
    /// Fetch `url`. Transport failures, timeouts and non-success statuses
    /// other than 404 are `ScrapeError::Retrieval`.
    fn get(&self, url: &str) -> Result<Fetched>;
}

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::retrieval("<client>", e))?;
        Ok(Self { client, timeout })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Fetched> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                ScrapeError::retrieval(url, format!("timed out after {}s", self.timeout.as_secs()))
            } else {
                ScrapeError::retrieval(url, e)
            }
        })?;

        let status = resp.status();
        debug!(url, %status, "response");
        if status == StatusCode::NOT_FOUND {
            return Ok(Fetched::Missing);
        }
        if !status.is_success() {
            return Err(ScrapeError::retrieval(url, format!("HTTP error: {status}")));
        }

        let body = resp.text().map_err(|e| ScrapeError::retrieval(url, e))?;
        Ok(Fetched::Page(body))
    }
}
