// src/error.rs
// =============================================================================
// Error types for the archiver.
//
// Per-page problems (FetchError, SkipReason) are recovered inside the crawl
// loop: they are logged and the crawl moves on. OutputError and ConfigError
// are fatal and bubble up to main, where anyhow adds context.
// =============================================================================

use std::path::PathBuf;

/// Why fetching a single page failed
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Connection, TLS, redirect or body-read failure
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(error)
        }
    }
}

/// Why a fetched page produced no PageRecord
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("no body element")]
    NoBody,

    #[error("no paragraph or list item text")]
    NoContent,
}

/// Failure to write the output document
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("cannot create {path:?}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// docx-rs failed while packing the archive
    #[error("cannot write document to {path:?}: {message}")]
    Serialize { path: PathBuf, message: String },
}

/// Invalid command-line configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site suffix must not be empty")]
    EmptySuffix,

    #[error("site suffix {0:?} must be a single path segment")]
    InvalidSuffix(String),

    #[error("invalid site root {url:?}: {reason}")]
    InvalidSiteRoot { url: String, reason: String },
}
