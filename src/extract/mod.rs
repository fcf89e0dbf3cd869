// src/extract/mod.rs
// =============================================================================
// This module turns a parsed HTML page into data the crawler can use.
//
// Submodules:
// - html: link discovery, block extraction and title lookup
//
// Everything here is pure: it reads the DOM and never changes it. Site chrome
// inside <header> is skipped while walking instead of being removed.
// =============================================================================

mod html;

pub use html::{anchor_hrefs, extract_page};
