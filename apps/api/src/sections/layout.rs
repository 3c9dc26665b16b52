//! Layout-driven segmentation for documents that carry per-span font and
//! position metadata.
//!
//! Headers are spans that both name a section and look like a header against
//! the body-font baseline. Each header owns the spans between its own index and
//! the next header's index, with headers taken in (page, top) reading order.

use tracing::debug;

use crate::models::document::TextSpan;
use crate::sections::keywords::{canonical_section, SectionKind};
use crate::sections::map::SectionMap;
use crate::sections::style::{font_profile, is_header};

/// A span judged to open a section.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCandidate {
    pub section: SectionKind,
    pub page_index: u32,
    pub top: f32,
    /// Index of the header span in the input span list.
    pub span_index: usize,
}

/// Header candidates sorted into reading order. Equal keys keep extraction order.
pub fn find_headers(spans: &[TextSpan], body_size: f32) -> Vec<HeaderCandidate> {
    let mut headers: Vec<HeaderCandidate> = spans
        .iter()
        .enumerate()
        .filter_map(|(span_index, span)| {
            let lowered = span.text.trim().to_lowercase();
            if lowered.is_empty() {
                return None;
            }
            let section = canonical_section(&lowered)?;
            is_header(span, body_size).then_some(HeaderCandidate {
                section,
                page_index: span.page_index,
                top: span.bbox.y0,
                span_index,
            })
        })
        .collect();

    headers.sort_by(|a, b| {
        a.page_index
            .cmp(&b.page_index)
            .then_with(|| a.top.total_cmp(&b.top))
    });
    headers
}

pub fn segment_spans(spans: &[TextSpan]) -> SectionMap {
    let profile = font_profile(spans);
    let headers = find_headers(spans, profile.body_size);
    debug!(
        body_size = profile.body_size,
        body_font = %profile.body_font,
        headers = headers.len(),
        "Layout profile"
    );

    let mut sections = SectionMap::new();
    for (i, header) in headers.iter().enumerate() {
        let start = header.span_index + 1;
        let end = headers
            .get(i + 1)
            .map_or(spans.len(), |next| next.span_index);

        // A later header that was extracted earlier leaves an empty range.
        let body = spans.get(start..end).unwrap_or_default();
        let text = body
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        sections.merge(header.section, text.trim());
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::BoundingBox;

    fn span_at(text: &str, size: f32, font: &str, page: u32, top: f32) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            font_size: size,
            font_name: font.to_string(),
            bbox: BoundingBox::new(72.0, top, 300.0, top + size),
            page_index: page,
        }
    }

    fn body(text: &str, page: u32, top: f32) -> TextSpan {
        span_at(text, 10.0, "Helvetica", page, top)
    }

    fn heading(text: &str, page: u32, top: f32) -> TextSpan {
        span_at(text, 14.0, "Helvetica-Bold", page, top)
    }

    #[test]
    fn test_empty_spans_yield_empty_map() {
        assert!(segment_spans(&[]).is_empty());
    }

    #[test]
    fn test_no_headers_yield_empty_map() {
        let spans = vec![body("Jane Doe", 0, 10.0), body("jane@example.com", 0, 24.0)];
        assert!(segment_spans(&spans).is_empty());
    }

    #[test]
    fn test_sections_split_between_headers() {
        let spans = vec![
            body("Jane Doe", 0, 10.0),
            heading("Experience", 0, 40.0),
            body("Acme Corp", 0, 60.0),
            body("Built billing", 0, 72.0),
            heading("EDUCATION", 0, 100.0),
            body("BSc Computer Science", 0, 120.0),
        ];
        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Experience), Some("Acme Corp Built billing"));
        assert_eq!(sections.get(SectionKind::Education), Some("BSc Computer Science"));
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_section_text_joins_raw_span_text_then_trims() {
        let spans = vec![
            heading("Skills", 0, 10.0),
            body(" Rust ", 0, 30.0),
            body("", 0, 42.0),
            body("Go ", 0, 54.0),
        ];
        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Skills), Some("Rust   Go"));
    }

    #[test]
    fn test_header_with_no_content_is_present_and_empty() {
        let spans = vec![
            body("filler one", 0, 5.0),
            body("filler two", 0, 6.0),
            heading("Summary", 0, 10.0),
            heading("Skills", 0, 30.0),
            body("Rust", 0, 50.0),
        ];
        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Summary), Some(""));
        assert_eq!(sections.get(SectionKind::Skills), Some("Rust"));
    }

    #[test]
    fn test_repeated_sections_merge_with_newline() {
        let spans = vec![
            heading("Education", 0, 10.0),
            body("BA Foo", 0, 30.0),
            heading("Projects", 0, 50.0),
            body("Compiler", 0, 70.0),
            heading("Education", 1, 10.0),
            body("MS Bar", 1, 30.0),
        ];
        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Education), Some("BA Foo\nMS Bar"));
        assert_eq!(sections.get(SectionKind::Projects), Some("Compiler"));
    }

    #[test]
    fn test_headers_sorted_by_page_then_top() {
        // Page 2's header is extracted before page 1's.
        let spans = vec![
            heading("Skills", 1, 20.0),
            body("Rust", 1, 40.0),
            heading("Experience", 0, 80.0),
            body("Acme", 0, 100.0),
            body("filler", 0, 120.0),
            body("filler", 0, 130.0),
        ];
        let profile = font_profile(&spans);
        let headers = find_headers(&spans, profile.body_size);
        let order: Vec<SectionKind> = headers.iter().map(|h| h.section).collect();
        assert_eq!(order, vec![SectionKind::Experience, SectionKind::Skills]);

        // Experience runs from index 3 up to Skills at index 0: an empty range.
        // Skills is last and runs to the end of the span list.
        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Experience), Some(""));
        assert_eq!(sections.get(SectionKind::Skills), Some("Rust Experience Acme filler filler"));
    }

    #[test]
    fn test_equal_sort_keys_keep_extraction_order() {
        let spans = vec![
            heading("Awards", 0, 50.0),
            heading("Honors", 0, 50.0),
            body("Dean's list", 0, 70.0),
            body("filler", 0, 80.0),
            body("filler", 0, 90.0),
        ];
        let profile = font_profile(&spans);
        let headers = find_headers(&spans, profile.body_size);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].span_index, 0);
        assert_eq!(headers[1].span_index, 1);

        let sections = segment_spans(&spans);
        assert_eq!(sections.get(SectionKind::Awards), Some("\nDean's list filler filler"));
    }

    #[test]
    fn test_keyword_in_body_sentence_is_not_a_header() {
        let spans = vec![
            body("my educational background includes several years of study", 0, 10.0),
            body("more body text", 0, 20.0),
        ];
        assert!(segment_spans(&spans).is_empty());
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let spans = vec![
            heading("Summary", 0, 10.0),
            body("Engineer", 0, 30.0),
            heading("Skills", 0, 50.0),
            body("Rust", 0, 70.0),
            body("Go", 0, 80.0),
        ];
        assert_eq!(segment_spans(&spans), segment_spans(&spans));
    }
}
