// src/model.rs
// =============================================================================
// Data produced by the crawler and consumed by the document assembler.
//
// - Block: one paragraph or list item of text
// - PageRecord: everything we keep from one successfully extracted page
//
// A PageRecord is built once and never changed afterwards, so its fields are
// private and only readable through accessors.
// =============================================================================

/// What kind of text a block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A `<p>` that does not sit inside a list item
    Paragraph,
    /// An `<li>`, including any paragraphs nested inside it
    ListItem,
}

/// One unit of extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    text: String,
}

impl Block {
    /// Builds a block from raw element text
    ///
    /// Returns None when the text is blank, so a Block never holds empty text.
    pub fn new(kind: BlockKind, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            kind,
            text: text.to_string(),
        })
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The content extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    url: String,
    title: String,
    blocks: Vec<Block>,
}

impl PageRecord {
    pub fn new(url: String, title: String, blocks: Vec<Block>) -> Self {
        Self { url, title, blocks }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw title, used as the sort key
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_trims_text() {
        let block = Block::new(BlockKind::Paragraph, "  Hello \n").unwrap();
        assert_eq!(block.text(), "Hello");
        assert_eq!(block.kind(), BlockKind::Paragraph);
    }

    #[test]
    fn test_blank_block_is_rejected() {
        assert!(Block::new(BlockKind::ListItem, "").is_none());
        assert!(Block::new(BlockKind::ListItem, " \t\n ").is_none());
    }
}
