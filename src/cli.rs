// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the Cli struct below *is* the argument list, and
// clap generates the parsing, --help and --version from it.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site2docx",
    version,
    about = "Archive the text of a small site into a single .docx document",
    long_about = "site2docx crawls every page under /site/<SUFFIX>/, keeps the paragraphs and \
                  list items of each page, and writes them to one Word document sorted by \
                  page title, with a page break between pages."
)]
pub struct Cli {
    /// Site suffix: pages live under <SITE_ROOT>/site/<SUFFIX>
    ///
    /// Example: site2docx my-team-wiki
    #[arg(env = "SITE2DOCX_SUFFIX")]
    pub suffix: String,

    /// Root URL of the site host
    #[arg(long, default_value = "https://sites.google.com/")]
    pub site_root: String,

    /// Output file (default: <SUFFIX>.docx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Delay between requests in milliseconds
    ///
    /// Set this when crawling a server that rate-limits.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}
