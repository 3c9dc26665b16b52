// Section segmentation engine.
// Two evidence sources: per-span font/position metadata (PDF) and bare line
// shape (DOCX, plain text). Both share the keyword table and merge rules.
// Pure and synchronous; nothing here touches I/O or shared mutable state.

pub mod keywords;
pub mod layout;
pub mod map;
pub mod plain;
pub mod style;

pub use keywords::SectionKind;
pub use map::SectionMap;

use crate::models::document::{ResumeDocument, TextSpan};

/// Which segmenter a document goes through, decided once from what the
/// reader produced.
#[derive(Debug, Clone, Copy)]
pub enum SectionSource<'a> {
    Layout(&'a [TextSpan]),
    PlainText(&'a str),
}

impl<'a> SectionSource<'a> {
    pub fn label(&self) -> &'static str {
        match self {
            SectionSource::Layout(_) => "layout",
            SectionSource::PlainText(_) => "plain_text",
        }
    }
}

impl<'a> From<&'a ResumeDocument> for SectionSource<'a> {
    fn from(doc: &'a ResumeDocument) -> Self {
        match &doc.spans {
            Some(spans) => SectionSource::Layout(spans),
            None => SectionSource::PlainText(&doc.raw_text),
        }
    }
}

pub fn segment(source: SectionSource<'_>) -> SectionMap {
    match source {
        SectionSource::Layout(spans) => layout::segment_spans(spans),
        SectionSource::PlainText(text) => plain::segment_text(text),
    }
}
