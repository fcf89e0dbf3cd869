// src/document/mod.rs
// =============================================================================
// This module turns crawled pages into one linear document.
//
// Pages are sorted by their raw title, then each page becomes a heading
// followed by its paragraphs and bullets. A page break separates pages.
//
// The output format sits behind the DocumentSink trait:
// - docx: the .docx writer used by the CLI
//
// Rust concepts:
// - Traits: assemble() works with any sink, tests use a recording one
// - Stable sorting: pages with equal titles keep their discovery order
// =============================================================================

mod docx;

pub use docx::DocxWriter;

use tracing::debug;

use crate::model::{BlockKind, PageRecord};

const UNTITLED: &str = "Untitled";

/// Receives the document one element at a time
pub trait DocumentSink {
    fn heading(&mut self, text: &str);
    fn paragraph(&mut self, text: &str);
    fn bullet(&mut self, text: &str);
    fn page_break(&mut self);
}

// Writes all pages to `sink` and returns how many were written
//
// Sorting uses the raw title; the cleaned title is only what the heading
// shows. `sort_by` is stable, so equal titles stay in discovery order.
pub fn assemble<S: DocumentSink>(mut pages: Vec<PageRecord>, sink: &mut S) -> usize {
    pages.sort_by(|a, b| a.title().cmp(b.title()));

    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            sink.page_break();
        }

        debug!(url = page.url(), blocks = page.blocks().len(), "writing page");
        sink.heading(&clean_title(page.title()));

        for block in page.blocks() {
            match block.kind() {
                BlockKind::ListItem => sink.bullet(block.text()),
                BlockKind::Paragraph => sink.paragraph(block.text()),
            }
        }
    }

    pages.len()
}

/// Keeps letters, digits, underscores, whitespace and hyphens
///
/// "Q&A: Tips!" becomes "QA Tips". A title with nothing left becomes
/// "Untitled".
pub fn clean_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();

    let trimmed = kept.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[derive(Debug, PartialEq)]
    enum Element {
        Heading(String),
        Paragraph(String),
        Bullet(String),
        PageBreak,
    }

    #[derive(Default)]
    struct RecordingSink {
        elements: Vec<Element>,
    }

    impl DocumentSink for RecordingSink {
        fn heading(&mut self, text: &str) {
            self.elements.push(Element::Heading(text.to_string()));
        }

        fn paragraph(&mut self, text: &str) {
            self.elements.push(Element::Paragraph(text.to_string()));
        }

        fn bullet(&mut self, text: &str) {
            self.elements.push(Element::Bullet(text.to_string()));
        }

        fn page_break(&mut self) {
            self.elements.push(Element::PageBreak);
        }
    }

    fn page(url: &str, title: &str, blocks: &[(BlockKind, &str)]) -> PageRecord {
        let blocks = blocks
            .iter()
            .map(|(kind, text)| Block::new(*kind, text).unwrap())
            .collect();
        PageRecord::new(url.to_string(), title.to_string(), blocks)
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("Q&A: Tips!"), "QA Tips");
        assert_eq!(clean_title("  snake_case - title  "), "snake_case - title");
        assert_eq!(clean_title("Caf\u{e9} 2024"), "Caf\u{e9} 2024");
        assert_eq!(clean_title("?!&"), "Untitled");
        assert_eq!(clean_title(""), "Untitled");
    }

    #[test]
    fn test_url_title_is_cleaned_for_display() {
        assert_eq!(
            clean_title("https://sites.google.com/site/x"),
            "httpssitesgooglecomsitex"
        );
    }

    #[test]
    fn test_single_page_has_no_page_break() {
        let pages = vec![page(
            "https://sites.google.com/site/x",
            "https://sites.google.com/site/x",
            &[(BlockKind::Paragraph, "Hello")],
        )];
        let mut sink = RecordingSink::default();

        let written = assemble(pages, &mut sink);

        assert_eq!(written, 1);
        assert_eq!(
            sink.elements,
            vec![
                Element::Heading("httpssitesgooglecomsitex".to_string()),
                Element::Paragraph("Hello".to_string()),
            ]
        );
    }

    #[test]
    fn test_pages_sorted_by_title_with_breaks_between() {
        let pages = vec![
            page("u1", "Zebra", &[(BlockKind::Paragraph, "z")]),
            page("u2", "Apple", &[(BlockKind::ListItem, "a1"), (BlockKind::Paragraph, "a2")]),
            page("u3", "Mango", &[(BlockKind::ListItem, "m")]),
        ];
        let mut sink = RecordingSink::default();

        assemble(pages, &mut sink);

        assert_eq!(
            sink.elements,
            vec![
                Element::Heading("Apple".to_string()),
                Element::Bullet("a1".to_string()),
                Element::Paragraph("a2".to_string()),
                Element::PageBreak,
                Element::Heading("Mango".to_string()),
                Element::Bullet("m".to_string()),
                Element::PageBreak,
                Element::Heading("Zebra".to_string()),
                Element::Paragraph("z".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_titles_keep_discovery_order() {
        let pages = vec![
            page("u1", "Same", &[(BlockKind::Paragraph, "first")]),
            page("u2", "Other", &[(BlockKind::Paragraph, "other")]),
            page("u3", "Same", &[(BlockKind::Paragraph, "second")]),
        ];
        let mut sink = RecordingSink::default();

        assemble(pages, &mut sink);

        let paragraphs: Vec<_> = sink
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Paragraph(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(paragraphs, vec!["other", "first", "second"]);
    }

    #[test]
    fn test_sort_uses_raw_title_not_cleaned_title() {
        // "!b" sorts before "a" on the raw title, even though it displays as "b"
        let pages = vec![
            page("u1", "a", &[(BlockKind::Paragraph, "from a")]),
            page("u2", "!b", &[(BlockKind::Paragraph, "from b")]),
        ];
        let mut sink = RecordingSink::default();

        assemble(pages, &mut sink);

        assert_eq!(sink.elements[0], Element::Heading("b".to_string()));
    }

    #[test]
    fn test_page_break_count() {
        for count in 1..6usize {
            let pages = (0..count)
                .map(|i| page("u", &format!("Page {i}"), &[(BlockKind::Paragraph, "text")]))
                .collect();
            let mut sink = RecordingSink::default();

            assemble(pages, &mut sink);

            let breaks = sink
                .elements
                .iter()
                .filter(|e| **e == Element::PageBreak)
                .count();
            assert_eq!(breaks, count - 1);
            assert_ne!(sink.elements.first(), Some(&Element::PageBreak));
            assert_ne!(sink.elements.last(), Some(&Element::PageBreak));
        }
    }

    #[test]
    fn test_no_pages_writes_nothing() {
        let mut sink = RecordingSink::default();
        assert_eq!(assemble(Vec::new(), &mut sink), 0);
        assert!(sink.elements.is_empty());
    }
}
