//! Reader output → contact details + section map.

use tracing::debug;

use crate::contact::parse_personal_info;
use crate::models::document::ResumeDocument;
use crate::models::resume::ParsedResume;
use crate::sections::{segment, SectionMap, SectionSource};

pub fn parse_resume(doc: &ResumeDocument) -> ParsedResume {
    let personal_info = parse_personal_info(&doc.raw_text);

    let source = SectionSource::from(doc);
    let path = source.label();
    let sections = segment(source);
    debug!(
        path,
        count = sections.len(),
        sections = %section_names(&sections),
        "Segmented resume"
    );

    ParsedResume {
        personal_info,
        sections,
    }
}

fn section_names(sections: &SectionMap) -> String {
    if sections.is_empty() {
        return "none".to_string();
    }
    sections
        .iter()
        .map(|(kind, _)| kind.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionKind;

    #[test]
    fn test_section_names_in_canonical_order() {
        let doc = ResumeDocument::plain("Skills\nRust\nSummary\nEngineer");
        let parsed = parse_resume(&doc);
        assert_eq!(section_names(&parsed.sections), "Summary, Skills");
        assert_eq!(section_names(&SectionMap::new()), "none");
    }

    #[test]
    fn test_plain_text_without_headings() {
        let doc = ResumeDocument::plain("  Jane Doe  \nLikes hiking\nWrites code");
        let parsed = parse_resume(&doc);
        assert!(parsed.sections.is_empty());
        assert_eq!(parsed.personal_info.name, "Jane Doe");
    }

    #[test]
    fn test_plain_text_full_resume() {
        let text = "Jane Doe\njane@example.com\n555-123-4567\n\nSUMMARY\nBackend engineer.\n\nExperience\nAcme Corp\nBuilt billing\n\nSkills:\nRust, Go";
        let parsed = parse_resume(&ResumeDocument::plain(text));
        assert_eq!(parsed.personal_info.email.as_deref(), Some("jane@example.com"));
        assert_eq!(parsed.personal_info.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(parsed.sections.get(SectionKind::Summary), Some("Backend engineer."));
        assert_eq!(
            parsed.sections.get(SectionKind::Experience),
            Some("Acme Corp\nBuilt billing")
        );
        assert_eq!(parsed.sections.get(SectionKind::Skills), Some("Rust, Go"));
    }

    #[test]
    fn test_empty_document() {
        let parsed = parse_resume(&ResumeDocument::plain(""));
        assert!(parsed.sections.is_empty());
        assert_eq!(parsed.personal_info.name, "");
        assert_eq!(parsed.personal_info.email, None);
    }
}
