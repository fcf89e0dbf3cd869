// src/crawl/scope.rs
// =============================================================================
// This module decides which links belong to the site and how URLs are
// written down before we compare them.
//
// Two hrefs can look different and still point to the same page
// ("/site/x/a", "/site/x//a", "https://https://host/site/x/a"). Every URL
// goes through `normalize` before it is checked against the visited set, so
// each page is fetched once.
// =============================================================================

use url::Url;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// The site being archived: its root URL and its path suffix
#[derive(Debug, Clone)]
pub struct SiteScope {
    root: Url,
    suffix: String,
    link_prefix: String,
}

impl SiteScope {
    pub fn new(root: Url, suffix: &str) -> Self {
        Self {
            root,
            suffix: suffix.to_string(),
            link_prefix: format!("/site/{}/", suffix),
        }
    }

    /// Normalized start URL, `<root>/site/<suffix>`
    pub fn seed(&self) -> Result<String, url::ParseError> {
        self.normalize(&format!("/site/{}", self.suffix))
    }

    /// True when the raw href (as written in the page) is an internal link
    ///
    /// The check is textual and runs before normalization, so absolute links
    /// to the same site are not followed.
    pub fn in_scope(&self, href: &str) -> bool {
        href.starts_with(&self.link_prefix)
    }

    /// Resolves `href` against the site root and cleans up doubled slashes
    ///
    /// Idempotent: normalizing an already normalized URL returns it unchanged.
    pub fn normalize(&self, href: &str) -> Result<String, url::ParseError> {
        // Resolve against the site root, like a browser would.
        // Absolute hrefs replace the root entirely, relative ones join it.
        let mut url = self.root.join(strip_doubled_scheme(href))?;

        // Only the path is cleaned up: "//" in a query string is data.
        // mailto: and similar URLs have no path to clean.
        if !url.cannot_be_a_base() {
            let path = collapse_slashes(url.path());
            url.set_path(&path);
        }

        Ok(url.to_string())
    }
}

// "https://https://host/x" -> "https://host/x"
fn strip_doubled_scheme(href: &str) -> &str {
    let mut href = href;

    // Peel off one scheme at a time for as long as another scheme follows it.
    // "https://https://https://host" needs two rounds.
    loop {
        // No scheme at the start: a relative href, nothing to strip
        let Some(rest) = SCHEMES.iter().find_map(|scheme| href.strip_prefix(scheme)) else {
            return href;
        };

        // Keep the last scheme, drop the ones in front of it
        if SCHEMES.iter().any(|scheme| rest.starts_with(scheme)) {
            href = rest;
        } else {
            return href;
        }
    }
}

// "/site//x///a" -> "/site/x/a"
fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_slash = false;

    // Copy the path one character at a time, skipping a '/' when the
    // character we just copied was also a '/'. Any run of slashes becomes
    // one, so running this twice gives the same result.
    for c in path.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        collapsed.push(c);
    }

    collapsed
}
