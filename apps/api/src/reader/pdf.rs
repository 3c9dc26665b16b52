//! PDF reading: raw text through `pdf_extract`, styled spans through a walk of
//! each page's content stream with `lopdf`.
//!
//! Every show-text operator (`Tj`, `TJ`, `'`, `"`) becomes one span. Positions
//! are converted to a top-left origin so that sorting by `bbox.y0` is top to
//! bottom. Widths are not measured; `x1` is a rough estimate.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

use crate::models::document::{BoundingBox, ResumeDocument, TextSpan};
use crate::reader::ReadError;

/// US letter height, used when a page has no readable MediaBox.
const DEFAULT_PAGE_HEIGHT: f32 = 792.0;
/// `TJ` offsets beyond this many thousandths of an em read as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;
const ASCENT: f32 = 0.8;
const DESCENT: f32 = 0.2;
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

pub fn read_pdf(path: &Path) -> Result<ResumeDocument, ReadError> {
    let doc = Document::load(path)?;
    let spans = extract_spans(&doc);

    let raw_text = match pdf_extract::extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                path = %path.display(),
                "pdf_extract failed ({e}), rebuilding text from {} spans",
                spans.len()
            );
            spans
                .iter()
                .map(|span| span.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    Ok(ResumeDocument::with_spans(raw_text, spans))
}

/// Spans for every page, in page order then content-stream order.
/// A page whose content cannot be decoded is skipped with a warning.
pub fn extract_spans(doc: &Document) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    for (page_index, (page_number, page_id)) in doc.get_pages().into_iter().enumerate() {
        match page_spans(doc, page_id, page_index as u32) {
            Ok(page) => {
                debug!(page = page_number, spans = page.len(), "Extracted page spans");
                spans.extend(page);
            }
            Err(e) => warn!(page = page_number, "Skipping unreadable page: {e}"),
        }
    }
    spans
}

fn page_spans(doc: &Document, page_id: ObjectId, page_index: u32) -> lopdf::Result<Vec<TextSpan>> {
    let fonts = doc.get_page_fonts(page_id)?;
    let content = Content::decode(&doc.get_page_content(page_id)?)?;

    let mut walker = PageWalker::new(doc, fonts, page_index, page_height(doc, page_id));
    for op in &content.operations {
        walker.apply(op);
    }
    Ok(walker.spans)
}

fn page_height(doc: &Document, page_id: ObjectId) -> f32 {
    let mut current = doc.get_dictionary(page_id).ok();
    // MediaBox is inheritable from the page tree.
    while let Some(dict) = current {
        if let Some(height) = dict
            .get(b"MediaBox")
            .ok()
            .and_then(|obj| resolve(doc, obj))
            .and_then(media_box_height)
        {
            return height;
        }
        current = dict
            .get(b"Parent")
            .ok()
            .and_then(|parent| parent.as_reference().ok())
            .and_then(|id| doc.get_dictionary(id).ok());
    }
    DEFAULT_PAGE_HEIGHT
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn media_box_height(obj: &Object) -> Option<f32> {
    match obj {
        Object::Array(items) if items.len() == 4 => {
            let lly = number(&items[1])?;
            let ury = number(&items[3])?;
            Some((ury - lly).abs())
        }
        _ => None,
    }
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content stream walk
// ────────────────────────────────────────────────────────────────────────────

/// 2D affine matrix `[a b c d e f]`, row-vector convention as in the PDF reference.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn translation(tx: f32, ty: f32) -> Self {
        Matrix {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    fn from_operands(operands: &[Object]) -> Option<Self> {
        match operands {
            [a, b, c, d, e, f, ..] => Some(Matrix {
                a: number(a)?,
                b: number(b)?,
                c: number(c)?,
                d: number(d)?,
                e: number(e)?,
                f: number(f)?,
            }),
            _ => None,
        }
    }

    /// `self × other`
    fn then(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Length of the transformed unit y vector.
    fn vertical_scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}

#[derive(Debug, Clone)]
struct GraphicsState {
    ctm: Matrix,
    font_resource: Vec<u8>,
    font_size: f32,
    leading: f32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            ctm: Matrix::IDENTITY,
            font_resource: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
        }
    }
}

struct PageWalker<'a> {
    doc: &'a Document,
    fonts: BTreeMap<Vec<u8>, &'a Dictionary>,
    page_index: u32,
    page_height: f32,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    spans: Vec<TextSpan>,
}

impl<'a> PageWalker<'a> {
    fn new(
        doc: &'a Document,
        fonts: BTreeMap<Vec<u8>, &'a Dictionary>,
        page_index: u32,
        page_height: f32,
    ) -> Self {
        Self {
            doc,
            fonts,
            page_index,
            page_height,
            state: GraphicsState::default(),
            saved: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            spans: Vec::new(),
        }
    }

    fn apply(&mut self, op: &Operation) {
        let operands = op.operands.as_slice();
        match op.operator.as_str() {
            "q" => self.saved.push(self.state.clone()),
            "Q" => {
                if let Some(state) = self.saved.pop() {
                    self.state = state;
                }
            }
            "cm" => {
                if let Some(m) = Matrix::from_operands(operands) {
                    self.state.ctm = m.then(&self.state.ctm);
                }
            }
            "BT" => {
                self.text_matrix = Matrix::IDENTITY;
                self.line_matrix = Matrix::IDENTITY;
            }
            "Tf" => {
                if let [Object::Name(resource), size, ..] = operands {
                    self.state.font_resource = resource.clone();
                    self.state.font_size = number(size).unwrap_or(self.state.font_size);
                }
            }
            "TL" => {
                if let Some(leading) = operands.first().and_then(number) {
                    self.state.leading = leading;
                }
            }
            "Td" | "TD" => {
                if let [tx, ty, ..] = operands {
                    let (tx, ty) = (number(tx).unwrap_or(0.0), number(ty).unwrap_or(0.0));
                    if op.operator == "TD" {
                        self.state.leading = -ty;
                    }
                    self.move_line(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = Matrix::from_operands(operands) {
                    self.text_matrix = m;
                    self.line_matrix = m;
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    let text = self.decode(bytes);
                    self.show(text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = operands.first() {
                    let text = self.decode_array(items);
                    self.show(text);
                }
            }
            "'" => {
                self.next_line();
                if let Some(Object::String(bytes, _)) = operands.first() {
                    let text = self.decode(bytes);
                    self.show(text);
                }
            }
            "\"" => {
                self.next_line();
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    let text = self.decode(bytes);
                    self.show(text);
                }
            }
            _ => {}
        }
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translation(tx, ty).then(&self.line_matrix);
        self.text_matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        let leading = self.state.leading;
        self.move_line(0.0, -leading);
    }

    fn font_name(&self) -> String {
        self.fonts
            .get(&self.state.font_resource)
            .and_then(|font| font.get(b"BaseFont").ok())
            .and_then(|name| name.as_name().ok())
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .unwrap_or_else(|| String::from_utf8_lossy(&self.state.font_resource).into_owned())
    }

    fn decode(&self, bytes: &[u8]) -> String {
        let encoding = self
            .fonts
            .get(&self.state.font_resource)
            .and_then(|font| font.get_font_encoding(self.doc).ok());

        match encoding {
            Some(ref enc) => {
                Document::decode_text(enc, bytes).unwrap_or_else(|_| decode_fallback(bytes))
            }
            None => decode_fallback(bytes),
        }
    }

    fn decode_array(&self, items: &[Object]) -> String {
        let mut combined = String::new();
        for item in items {
            match item {
                Object::String(bytes, _) => combined.push_str(&self.decode(bytes)),
                other => {
                    let gap = number(other).map_or(0.0, |n| -n);
                    if gap > TJ_SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ')
                    {
                        combined.push(' ');
                    }
                }
            }
        }
        combined
    }

    fn show(&mut self, text: String) {
        if text.is_empty() {
            return;
        }

        let trm = self.text_matrix.then(&self.state.ctm);
        let size = round_size(self.state.font_size * trm.vertical_scale());
        let x0 = trm.e;
        let baseline = trm.f;
        let width = AVG_CHAR_WIDTH_EM * size * text.chars().count() as f32;

        self.spans.push(TextSpan {
            font_name: self.font_name(),
            font_size: size,
            bbox: BoundingBox::new(
                x0,
                self.page_height - (baseline + ASCENT * size),
                x0 + width,
                self.page_height - (baseline - DESCENT * size),
            ),
            page_index: self.page_index,
            text,
        });
    }
}

/// Hundredths of a point, so float noise does not split one size into many.
fn round_size(size: f32) -> f32 {
    (size * 100.0).round() / 100.0
}

/// UTF-16BE when the string carries a BOM, Latin-1 otherwise.
fn decode_fallback(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xfe, 0xff]) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    bytes.iter().map(|&b| b as char).collect()
}
