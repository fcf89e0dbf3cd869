// src/crawl/queue.rs
// =============================================================================
// This module implements the site crawl with a breadth-first approach.
//
// How it works:
// 1. Start with the normalized seed URL in the frontier
// 2. Pop the oldest URL and fetch its HTML
// 3. Queue every internal link not seen before
// 4. Extract the page's blocks and title into a PageRecord
// 5. Repeat until the frontier is empty
//
// A URL is marked visited when it is queued, not when it is fetched, so a
// page linked from many places still enters the frontier once.
//
// Pages are processed strictly one after another: links found on page N are
// queued before page N+1 is popped, which keeps the order breadth-first.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: FIFO queue for breadth-first crawling
// - Enums: PageOutcome says what happened to each page
// =============================================================================

use scraper::Html;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::fetch::Fetcher;
use super::scope::SiteScope;
use crate::error::{FetchError, SkipReason};
use crate::extract;
use crate::model::PageRecord;

/// What happened to one URL taken from the frontier
#[derive(Debug)]
pub enum PageOutcome {
    /// The page yielded at least one block
    Fetched(PageRecord),
    /// The page was fetched but has nothing to archive
    Skipped(SkipReason),
    /// The page could not be fetched
    Failed(FetchError),
}

/// Mutable state of one crawl
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<String>,
    frontier: VecDeque<String>,
    pages: Vec<PageRecord>,
}

impl CrawlState {
    pub fn seeded(seed: String) -> Self {
        let mut state = Self::default();
        state.enqueue(seed);
        state
    }

    /// Queues a normalized URL unless it was seen before
    ///
    /// Returns true when the URL was new.
    pub fn enqueue(&mut self, url: String) -> bool {
        if !self.visited.insert(url.clone()) {
            return false;
        }
        self.frontier.push_back(url);
        true
    }

    pub fn next_url(&mut self) -> Option<String> {
        self.frontier.pop_front()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn push_page(&mut self, page: PageRecord) {
        self.pages.push(page);
    }
}

/// Everything a finished crawl produced
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Extracted pages in discovery order
    pub pages: Vec<PageRecord>,
    pub skipped: Vec<(String, SkipReason)>,
    pub failed: Vec<(String, FetchError)>,
    /// Number of URLs taken from the frontier
    pub fetched: usize,
}

/// Breadth-first crawler over one site
pub struct Crawler<F> {
    fetcher: F,
    scope: SiteScope,
    delay: Duration,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, scope: SiteScope) -> Self {
        Self {
            fetcher,
            scope,
            delay: Duration::ZERO,
        }
    }

    /// Pause between consecutive fetches
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    // Crawls everything reachable from `seed` through internal links
    //
    // Per-page failures never stop the crawl: they are logged and recorded
    // in the report, and the next URL is popped.
    pub async fn crawl(&self, seed: &str) -> CrawlReport {
        let mut state = CrawlState::seeded(seed.to_string());
        let mut report = CrawlReport::default();

        while let Some(url) = state.next_url() {
            if report.fetched > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            report.fetched += 1;

            match self.visit(&mut state, &url).await {
                PageOutcome::Fetched(page) => {
                    info!(url = %url, title = %page.title(), "added page");
                    state.push_page(page);
                }
                PageOutcome::Skipped(reason) => {
                    warn!(url = %url, %reason, "skipped page");
                    report.skipped.push((url, reason));
                }
                PageOutcome::Failed(error) => {
                    warn!(url = %url, %error, "failed to fetch page");
                    report.failed.push((url, error));
                }
            }

            debug!(remaining = state.frontier_len(), "frontier");
        }

        report.pages = state.pages;
        report
    }

    // Fetches one URL, queues its internal links and extracts its content
    pub async fn visit(&self, state: &mut CrawlState, url: &str) -> PageOutcome {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(error) => return PageOutcome::Failed(error),
        };

        let document = Html::parse_document(&html);
        self.queue_links(state, &document);

        match extract::extract_page(&document, url) {
            Ok(page) => PageOutcome::Fetched(page),
            Err(reason) => PageOutcome::Skipped(reason),
        }
    }

    fn queue_links(&self, state: &mut CrawlState, document: &Html) {
        for href in extract::anchor_hrefs(document) {
            // Textual check on the raw href, before normalization
            if !self.scope.in_scope(href) {
                debug!(href, "link outside site prefix");
                continue;
            }

            match self.scope.normalize(href) {
                Ok(link) => {
                    if state.enqueue(link.clone()) {
                        debug!(%link, "queued link");
                    }
                }
                Err(error) => debug!(href, %error, "cannot resolve link"),
            }
        }
    }
}
