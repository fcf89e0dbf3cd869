// src/document/docx.rs
// =============================================================================
// DocumentSink that writes a Word (.docx) file with the `docx-rs` crate.
//
// Paragraphs are collected in memory; `save` adds the styles and the bullet
// numbering definition and writes the whole archive at once.
// =============================================================================

use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, Paragraph, Run, SpecialIndentType, Start, Style,
    StyleType,
};
use std::fs::File;
use std::path::Path;

use super::DocumentSink;
use crate::error::OutputError;

const HEADING_STYLE: &str = "Heading1";
const BULLET_STYLE: &str = "ListBullet";
const BULLET_NUMBERING: usize = 1;

// Word measures font sizes in half-points: 40 is a 20pt heading
const HEADING_SIZE: usize = 40;

// Spacing and indents are in twips (twentieths of a point, 1440 per inch).
// 480 is 24pt above the heading, 240 is 12pt below it.
const HEADING_SPACE_BEFORE: u32 = 480;
const HEADING_SPACE_AFTER: u32 = 240;

// Bullet text starts half an inch in; the bullet hangs a quarter inch left of it
const BULLET_INDENT: i32 = 720;
const BULLET_HANGING: i32 = 360;

/// Builds a .docx document from DocumentSink calls
#[derive(Debug, Default)]
pub struct DocxWriter {
    paragraphs: Vec<Paragraph>,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the document to `path`, replacing any existing file
    pub fn save(self, path: &Path) -> Result<(), OutputError> {
        let docx = self.into_docx();

        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        docx.build()
            .pack(file)
            .map_err(|e| OutputError::Serialize {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    // Styles and numbering first, then the body paragraphs in call order
    fn into_docx(self) -> Docx {
        self.paragraphs
            .into_iter()
            .fold(base_document(), |docx, paragraph| docx.add_paragraph(paragraph))
    }
}

impl DocumentSink for DocxWriter {
    fn heading(&mut self, text: &str) {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(HEADING_STYLE)
            .keep_next(true)
            .line_spacing(
                LineSpacing::new()
                    .before(HEADING_SPACE_BEFORE)
                    .after(HEADING_SPACE_AFTER),
            );
        self.paragraphs.push(paragraph);
    }

    fn paragraph(&mut self, text: &str) {
        self.paragraphs
            .push(Paragraph::new().add_run(Run::new().add_text(text)));
    }

    fn bullet(&mut self, text: &str) {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text(text))
            .style(BULLET_STYLE)
            .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0));
        self.paragraphs.push(paragraph);
    }

    fn page_break(&mut self) {
        self.paragraphs
            .push(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)));
    }
}

// Empty document with the heading style and the bullet list definition
fn base_document() -> Docx {
    let heading = Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .size(HEADING_SIZE)
        .bold();

    let bullet = Style::new(BULLET_STYLE, StyleType::Paragraph).name("List Bullet");

    // Level 0 is the only level used: list items are never nested in the output
    let level = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("\u{2022}"),
        LevelJc::new("left"),
    )
    .indent(
        Some(BULLET_INDENT),
        Some(SpecialIndentType::Hanging(BULLET_HANGING)),
        None,
        None,
    );
    let bullets = AbstractNumbering::new(BULLET_NUMBERING).add_level(level);

    Docx::new()
        .add_style(heading)
        .add_style(bullet)
        .add_abstract_numbering(bullets)
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_a_zip_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.docx");

        let mut writer = DocxWriter::new();
        writer.heading("About");
        writer.paragraph("Who we are");
        writer.bullet("One");
        writer.page_break();
        writer.heading("Contact");
        writer.paragraph("Write to us");
        writer.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    fn xml(part: &[u8]) -> String {
        String::from_utf8(part.to_vec()).unwrap()
    }

    #[test]
    fn test_document_xml_carries_heading_and_bullet_formatting() {
        let mut writer = DocxWriter::new();
        for (index, title) in ["About", "Contact", "News"].iter().enumerate() {
            if index > 0 {
                writer.page_break();
            }
            writer.heading(title);
            writer.paragraph("Text");
            writer.bullet("Item");
        }

        let built = writer.into_docx().build();
        let document = xml(&built.document);
        let styles = xml(&built.styles);
        let numberings = xml(&built.numberings);

        // Heading 1: 20pt bold
        assert!(styles.contains(r#"w:styleId="Heading1""#));
        assert!(styles.contains(r#"w:sz w:val="40""#));

        // Heading paragraphs: 24pt before, 12pt after, kept with the next paragraph
        assert!(document.contains(r#"w:before="480""#));
        assert!(document.contains(r#"w:after="240""#));
        assert_eq!(document.matches("w:keepNext").count(), 3);

        // Each bullet points at the list definition
        assert_eq!(document.matches("<w:numPr>").count(), 3);
        assert!(numberings.contains(r#"w:left="720""#));
        assert!(numberings.contains(r#"w:hanging="360""#));

        // Three pages, two breaks
        assert_eq!(document.matches(r#"w:br w:type="page""#).count(), 2);
    }

    #[test]
    fn test_single_page_document_has_no_page_break() {
        let mut writer = DocxWriter::new();
        writer.heading("Only");
        writer.paragraph("Text");

        let built = writer.into_docx().build();
        let document = xml(&built.document);

        assert!(!document.contains(r#"w:type="page""#));
        assert!(!document.contains("<w:numPr>"));
    }

    #[test]
    fn test_empty_document_can_be_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");

        DocxWriter::new().save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.docx");

        let result = DocxWriter::new().save(&path);

        assert!(matches!(result, Err(OutputError::Create { .. })));
    }
}
