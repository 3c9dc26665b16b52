//! Document reader: turns a resume file on disk into raw text plus, for PDFs,
//! per-span font and position metadata.
//!
//! Dispatch is on the lowercased file extension: `pdf`, `docx`, and anything
//! else is read as UTF-8 text. All reading is blocking; async callers go
//! through `tokio::task::spawn_blocking`.

pub mod pdf;

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::document::ResumeDocument;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("text is not valid UTF-8")]
    UnsupportedEncoding,
}

pub fn read_resume(path: &Path) -> Result<ResumeDocument, ReadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let doc = match ext.as_str() {
        "pdf" => pdf::read_pdf(path)?,
        "docx" => read_docx(path)?,
        _ => read_text(path)?,
    };

    debug!(
        path = %path.display(),
        chars = doc.raw_text.len(),
        spans = ?doc.spans.as_ref().map(Vec::len),
        "Read resume"
    );
    Ok(doc)
}

fn read_docx(path: &Path) -> Result<ResumeDocument, ReadError> {
    let text = docx_lite::extract_text(path).map_err(|e| ReadError::Docx(e.to_string()))?;
    Ok(ResumeDocument::plain(text))
}

fn read_text(path: &Path) -> Result<ResumeDocument, ReadError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| ReadError::UnsupportedEncoding)?;
    Ok(ResumeDocument::plain(text))
}
