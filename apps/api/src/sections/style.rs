//! Body-font profiling and the visual header test used on the layout path.

use crate::models::document::TextSpan;

pub const DEFAULT_BODY_SIZE: f32 = 10.0;
pub const DEFAULT_BODY_FONT: &str = "default";

/// Dominant ("body text") size and family of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FontProfile {
    pub body_size: f32,
    pub body_font: String,
}

impl Default for FontProfile {
    fn default() -> Self {
        Self {
            body_size: DEFAULT_BODY_SIZE,
            body_font: DEFAULT_BODY_FONT.to_string(),
        }
    }
}

/// Majority vote over spans with non-blank text.
///
/// Ties go to whichever value was encountered first.
pub fn font_profile(spans: &[TextSpan]) -> FontProfile {
    let visible = || spans.iter().filter(|span| !span.text.trim().is_empty());

    let body_size = most_frequent(visible().map(|span| span.font_size)).unwrap_or(DEFAULT_BODY_SIZE);
    let body_font = most_frequent(visible().map(|span| span.font_name.as_str()))
        .unwrap_or(DEFAULT_BODY_FONT)
        .to_string();

    FontProfile {
        body_size,
        body_font,
    }
}

/// A span is a header when it is visually distinct (larger than body by more
/// than a point, or bold) AND short (under five words) or shouted in caps.
pub fn is_header(span: &TextSpan, body_size: f32) -> bool {
    let text = span.text.trim();
    if text.is_empty() {
        return false;
    }

    let is_formatted =
        span.font_size > body_size + 1.0 || span.font_name.to_lowercase().contains("bold");
    let is_header_like = text.split_whitespace().count() < 5 || is_all_caps(text);

    is_formatted && is_header_like
}

/// True when the text has at least one cased letter and none of them are lowercase.
pub fn is_all_caps(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

fn most_frequent<T: PartialEq>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut tally: Vec<(T, usize)> = Vec::new();
    for value in values {
        match tally.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => tally.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::BoundingBox;

    fn span(text: &str, size: f32, font: &str) -> TextSpan {
        TextSpan {
            text: text.to_string(),
            font_size: size,
            font_name: font.to_string(),
            bbox: BoundingBox::new(0.0, 0.0, 100.0, 12.0),
            page_index: 0,
        }
    }

    // ── font_profile ────────────────────────────────────────────────────────

    #[test]
    fn test_empty_spans_use_defaults() {
        let profile = font_profile(&[]);
        assert_eq!(profile.body_size, 10.0);
        assert_eq!(profile.body_font, "default");
    }

    #[test]
    fn test_blank_spans_do_not_vote() {
        let spans = vec![
            span("   ", 14.0, "Big"),
            span("", 14.0, "Big"),
            span("\t", 14.0, "Big"),
        ];
        assert_eq!(font_profile(&spans), FontProfile::default());
    }

    #[test]
    fn test_majority_size_and_font() {
        let spans = vec![
            span("EXPERIENCE", 16.0, "Helvetica-Bold"),
            span("Built things", 10.5, "Helvetica"),
            span("Shipped things", 10.5, "Helvetica"),
            span("   ", 16.0, "Helvetica-Bold"),
            span("   ", 16.0, "Helvetica-Bold"),
        ];
        let profile = font_profile(&spans);
        assert_eq!(profile.body_size, 10.5);
        assert_eq!(profile.body_font, "Helvetica");
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let spans = vec![
            span("a", 12.0, "Times"),
            span("b", 11.0, "Arial"),
            span("c", 11.0, "Arial"),
            span("d", 12.0, "Times"),
        ];
        let profile = font_profile(&spans);
        assert_eq!(profile.body_size, 12.0);
        assert_eq!(profile.body_font, "Times");
    }

    #[test]
    fn test_profile_is_deterministic() {
        let spans = vec![
            span("a", 9.0, "X"),
            span("b", 10.0, "Y"),
            span("c", 11.0, "Z"),
        ];
        assert_eq!(font_profile(&spans), font_profile(&spans));
        assert_eq!(font_profile(&spans).body_size, 9.0);
    }

    // ── is_header ───────────────────────────────────────────────────────────

    #[test]
    fn test_large_short_span_is_header() {
        assert!(is_header(&span("Experience", 14.0, "Helvetica"), 10.0));
    }

    #[test]
    fn test_bold_short_span_is_header() {
        assert!(is_header(&span("Education", 10.0, "Arial-BoldMT"), 10.0));
    }

    #[test]
    fn test_size_threshold_is_strictly_more_than_one_point() {
        assert!(!is_header(&span("Skills", 11.0, "Helvetica"), 10.0));
        assert!(is_header(&span("Skills", 11.5, "Helvetica"), 10.0));
    }

    #[test]
    fn test_bold_long_sentence_is_not_header() {
        let s = span("Led the migration of billing services", 10.0, "Helvetica-Bold");
        assert!(!is_header(&s, 10.0));
    }

    #[test]
    fn test_bold_long_all_caps_is_header() {
        let s = span("RELEVANT WORK EXPERIENCE AND PROJECTS", 10.0, "Helvetica-Bold");
        assert!(is_header(&s, 10.0));
    }

    #[test]
    fn test_body_size_long_lowercase_never_header() {
        let s = span(
            "my educational background includes several years of study",
            10.0,
            "Helvetica",
        );
        assert!(!is_header(&s, 10.0));
    }

    #[test]
    fn test_short_plain_fragment_is_not_header() {
        assert!(!is_header(&span("Skills", 10.0, "Helvetica"), 10.0));
    }

    #[test]
    fn test_whitespace_span_is_never_header() {
        assert!(!is_header(&span("   ", 20.0, "Helvetica-Bold"), 10.0));
    }

    // ── is_all_caps ─────────────────────────────────────────────────────────

    #[test]
    fn test_all_caps_requires_a_cased_letter() {
        assert!(is_all_caps("WORK HISTORY:"));
        assert!(is_all_caps("B.S. 2019"));
        assert!(!is_all_caps("2019 - 2021"));
        assert!(!is_all_caps("Work History"));
    }
}
