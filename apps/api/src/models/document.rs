use serde::Serialize;

/// Axis-aligned box in page coordinates with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl BoundingBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// One styled run of text as it came out of the document, in extraction order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub font_size: f32,
    pub font_name: String,
    pub bbox: BoundingBox,
    /// Zero-based page number.
    pub page_index: u32,
}

/// What the document reader hands to the parsing pipeline.
///
/// `spans` is `Some` only when the source carried layout metadata (PDF).
/// An empty-but-present list still selects the layout segmenter.
#[derive(Debug, Clone, Default)]
pub struct ResumeDocument {
    pub raw_text: String,
    pub spans: Option<Vec<TextSpan>>,
}

impl ResumeDocument {
    pub fn plain(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            spans: None,
        }
    }

    pub fn with_spans(raw_text: impl Into<String>, spans: Vec<TextSpan>) -> Self {
        Self {
            raw_text: raw_text.into(),
            spans: Some(spans),
        }
    }

    pub fn has_text(&self) -> bool {
        !self.raw_text.trim().is_empty()
    }
}
