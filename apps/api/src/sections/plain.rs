//! Line-shape segmentation for text without layout metadata (DOCX, plain text).
//!
//! A line opens a section when it names one and is shaped like a heading:
//! at most five words, all caps, or ending in a colon. Short body lines that
//! happen to contain a keyword will also open a section; there is no font
//! evidence to rule them out.
//!
//! Lines break on `\n`, `\r\n`, a lone `\r`, and the other Unicode line
//! separators (vertical tab, form feed, file/group/record separators, NEL,
//! LS, PS).

use crate::sections::keywords::{canonical_section, SectionKind};
use crate::sections::map::SectionMap;
use crate::sections::style::is_all_caps;

const MAX_HEADING_WORDS: usize = 5;

pub fn segment_text(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<SectionKind> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in split_lines(text) {
        let cleaned = line.trim();
        if cleaned.is_empty() {
            if current.is_some() {
                buffer.push("");
            }
            continue;
        }

        match heading_section(cleaned) {
            Some(section) => {
                flush(&mut sections, current, &mut buffer);
                current = Some(section);
            }
            None if current.is_some() => buffer.push(cleaned),
            // Preamble before the first heading is dropped.
            None => {}
        }
    }

    flush(&mut sections, current, &mut buffer);
    sections
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits on every line break, counting `\r\n` once. A trailing break does
/// not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// The section a trimmed, non-empty line opens, if it is heading-shaped.
pub fn heading_section(line: &str) -> Option<SectionKind> {
    let section = canonical_section(&line.to_lowercase())?;
    looks_like_heading(line).then_some(section)
}

fn looks_like_heading(line: &str) -> bool {
    line.split_whitespace().count() <= MAX_HEADING_WORDS || is_all_caps(line) || line.ends_with(':')
}

fn flush(sections: &mut SectionMap, current: Option<SectionKind>, buffer: &mut Vec<&str>) {
    if let Some(section) = current {
        sections.merge_block(section, &buffer.join("\n"));
    }
    buffer.clear();
}
