// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the site.
//
// Features:
// - Breadth-first crawling starting from the site seed URL
// - Only follows links under the site-path prefix
// - URL normalization so no page is fetched twice
// - Optional delay between requests
//
// Submodules:
// - fetch: downloading pages (Fetcher trait, reqwest implementation)
// - scope: which links are internal, and URL normalization
// - queue: the crawl loop itself
// =============================================================================

mod fetch;
mod queue;
mod scope;

pub use fetch::HttpFetcher;
pub use queue::{CrawlReport, Crawler};
pub use scope::SiteScope;
