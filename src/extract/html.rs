// src/extract/html.rs
// =============================================================================
// This module reads content out of a parsed HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree (built on html5ever)
// - Supports CSS selectors for finding elements ("a[href]", "body", "h1")
// - Lets us walk elements, their ancestors and their text nodes
//
// Three things are extracted:
// - The raw href of every link
// - Blocks: <p> (outside any <li>) as paragraphs and <li> as list items
// - The title: the first <h1> outside the page header
//
// Anything inside a <header> element counts as site chrome. It is skipped for
// blocks, for titles and for the text of enclosing elements. Links are
// collected from the whole page, header included.
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::SkipReason;
use crate::model::{Block, BlockKind, PageRecord};

// Returns the raw href of every <a>, as written in the page
pub fn anchor_hrefs(document: &Html) -> Vec<&str> {
    // "a[href]" means "all <a> tags that have an href attribute"
    let selector = selector("a[href]");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .collect()
}

// Extracts the ordered blocks of the page body
//
// Returns None when the document has no <body>. The returned list may be
// empty when the body holds no paragraph or list item text.
pub fn extract_blocks(document: &Html) -> Option<Vec<Block>> {
    let selector = selector("body");
    let body = document.select(&selector).next()?;

    // descendants() walks the subtree depth-first, which is document order.
    // Text nodes and comments are dropped by ElementRef::wrap.
    let blocks = body
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| !inside_header(*element))
        .filter_map(classify)
        .collect();

    Some(blocks)
}

// Text of the first <h1> outside the header, trimmed
//
// Only the first such <h1> is considered: if it is blank we return None
// rather than looking at later headings.
pub fn extract_title(document: &Html) -> Option<String> {
    let selector = selector("h1");
    let heading = document
        .select(&selector)
        .find(|element| !inside_header(*element))?;

    let title = visible_text(heading).trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

// Builds the PageRecord for a fetched page, or says why there is none
pub fn extract_page(document: &Html, url: &str) -> Result<PageRecord, SkipReason> {
    let blocks = extract_blocks(document).ok_or(SkipReason::NoBody)?;
    if blocks.is_empty() {
        return Err(SkipReason::NoContent);
    }

    // No usable <h1>: the URL stands in as the title
    let title = extract_title(document).unwrap_or_else(|| url.to_string());

    Ok(PageRecord::new(url.to_string(), title, blocks))
}

// Parses one of the constant selectors above
//
// Selector::parse only fails on invalid CSS, and every selector in this file
// is a literal known to be valid.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap()
}

fn classify(element: ElementRef<'_>) -> Option<Block> {
    let kind = match element.value().name() {
        // A paragraph inside a list item is already covered by the item
        "p" if !has_list_item_ancestor(element) => BlockKind::Paragraph,
        "li" => BlockKind::ListItem,
        _ => return None,
    };

    // Block::new returns None for blank text, so empty elements drop out here
    Block::new(kind, &visible_text(element))
}

fn is_tag(node: &Node, name: &str) -> bool {
    node.as_element()
        .is_some_and(|element| element.name() == name)
}

// True for a <header> element or anything nested inside one
fn inside_header(element: ElementRef<'_>) -> bool {
    element.value().name() == "header"
        || element.ancestors().any(|node| is_tag(node.value(), "header"))
}

// Strict ancestors only: the element itself is not checked
fn has_list_item_ancestor(element: ElementRef<'_>) -> bool {
    element.ancestors().any(|node| is_tag(node.value(), "li"))
}

// Concatenated text of the element's subtree, leaving out header subtrees
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in element.descendants() {
        // Only text nodes carry text; elements are just containers
        let Some(chunk) = node.value().as_text() else {
            continue;
        };

        // Look at the ancestors between this text node and `element`.
        // We stop at `element`: a header further up the tree is the caller's
        // business (inside_header), not part of this subtree.
        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != element.id())
            .any(|ancestor| is_tag(ancestor.value(), "header"));

        if !hidden {
            text.push_str(chunk);
        }
    }

    text
}
