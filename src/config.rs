// src/config.rs
// =============================================================================
// Validated run configuration, built from the parsed command line.
//
// Everything the crawl and the document writer need is resolved here once:
// the site scope, the seed URL, the output path and the timings.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::cli::Cli;
use crate::crawl::SiteScope;
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub scope: SiteScope,
    /// Normalized start URL
    pub seed: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub delay: Duration,
}

impl ArchiveConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let suffix = cli.suffix.trim();
        if suffix.is_empty() {
            return Err(ConfigError::EmptySuffix);
        }
        if suffix.contains('/') {
            return Err(ConfigError::InvalidSuffix(suffix.to_string()));
        }

        let root = parse_site_root(&cli.site_root)?;
        let scope = SiteScope::new(root, suffix);
        let seed = scope
            .seed()
            .map_err(|e| ConfigError::InvalidSuffix(format!("{suffix} ({e})")))?;

        let output = cli
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{suffix}.docx")));

        Ok(Self {
            scope,
            seed,
            output,
            timeout: Duration::from_secs(cli.timeout),
            delay: Duration::from_millis(cli.delay_ms),
        })
    }
}

fn parse_site_root(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidSiteRoot {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<ArchiveConfig, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("site2docx").chain(args.iter().copied()))
            .unwrap();
        ArchiveConfig::from_cli(cli)
    }

    #[test]
    fn test_defaults_from_suffix() {
        let config = config(&["wiki"]).unwrap();
        assert_eq!(config.seed, "https://sites.google.com/site/wiki");
        assert_eq!(config.output, PathBuf::from("wiki.docx"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.delay, Duration::ZERO);
        assert!(config.scope.in_scope("/site/wiki/page"));
    }

    #[test]
    fn test_custom_site_root() {
        let config = config(&["wiki", "--site-root", "http://localhost:8080/"]).unwrap();
        assert_eq!(config.seed, "http://localhost:8080/site/wiki");
    }

    #[test]
    fn test_blank_suffix_is_rejected() {
        assert!(matches!(config(&["  "]), Err(ConfigError::EmptySuffix)));
    }

    #[test]
    fn test_suffix_with_slash_is_rejected() {
        assert!(matches!(config(&["a/b"]), Err(ConfigError::InvalidSuffix(_))));
    }

    #[test]
    fn test_bad_site_root_is_rejected() {
        assert!(matches!(
            config(&["wiki", "--site-root", "not a url"]),
            Err(ConfigError::InvalidSiteRoot { .. })
        ));
        assert!(matches!(
            config(&["wiki", "--site-root", "ftp://example.com/"]),
            Err(ConfigError::InvalidSiteRoot { .. })
        ));
    }
}
