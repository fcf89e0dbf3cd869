// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only needs "give me the HTML at this URL", so that is all the
// Fetcher trait asks for. HttpFetcher is the real implementation on top of
// reqwest; tests swap in an in-memory fetcher.
//
// Rust concepts:
// - Traits: The crawler is generic over any Fetcher
// - async fn in traits: fetching is I/O, so it is async
// =============================================================================

use reqwest::Client;
use std::time::Duration;

use crate::error::FetchError;

/// Something that can return the HTML of a URL
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP(S)
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // One client for the whole crawl, so connections are reused
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        // Only 2xx responses carry a page worth extracting
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
