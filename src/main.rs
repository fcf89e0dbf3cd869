// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse and validate command-line arguments
// 2. Crawl the site breadth-first, one page at a time
// 3. Assemble the pages into a .docx document and save it
// 4. Print a summary and exit (0 = success, 2 = error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod document;
mod error;
mod extract;
mod model;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::ArchiveConfig;
use crawl::{Crawler, HttpFetcher};
use document::DocxWriter;

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let started = Instant::now();

    let config = ArchiveConfig::from_cli(Cli::parse()).context("invalid configuration")?;
    info!(seed = %config.seed, "crawling site");

    let fetcher = HttpFetcher::new(config.timeout).context("failed to create HTTP client")?;
    let crawler = Crawler::new(fetcher, config.scope.clone()).with_delay(config.delay);
    let report = crawler.crawl(&config.seed).await;

    let skipped = report.skipped.len();
    let failed = report.failed.len();

    info!(
        fetched = report.fetched,
        pages = report.pages.len(),
        "crawl finished, creating document"
    );
    let mut writer = DocxWriter::new();
    let written = document::assemble(report.pages, &mut writer);
    writer
        .save(&config.output)
        .with_context(|| format!("failed to save {}", config.output.display()))?;
    info!(path = %config.output.display(), "document saved");

    println!();
    println!("Completed in {:.1} seconds", started.elapsed().as_secs_f64());
    println!("Pages processed: {}", written);
    if skipped > 0 || failed > 0 {
        println!("Pages skipped: {}, failed: {}", skipped, failed);
    }

    Ok(0)
}
