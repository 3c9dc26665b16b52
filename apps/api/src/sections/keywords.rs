//! Canonical section names and the keyword table both segmenters share.
//!
//! Matching is substring-based on lowercased text, scanning groups in
//! declaration order. The first group with any hit wins, so "education and
//! skills" lands in Education. Reordering the table changes results.

use std::fmt;

use serde::Serialize;

/// The fixed set of labels a resume can be segmented into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Awards,
    Publications,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Awards => "Awards",
            SectionKind::Publications => "Publications",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword variants that all map onto one canonical section.
#[derive(Debug)]
pub struct KeywordGroup {
    pub keywords: &'static [&'static str],
    pub section: SectionKind,
}

impl KeywordGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

pub static SECTION_KEYWORDS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["summary", "profile", "objective"],
        section: SectionKind::Summary,
    },
    KeywordGroup {
        keywords: &[
            "experience",
            "professional experience",
            "work experience",
            "work history",
            "employment",
        ],
        section: SectionKind::Experience,
    },
    KeywordGroup {
        keywords: &[
            "education",
            "educational",
            "educational history",
            "degree",
            "school",
            "institution",
            "university",
            "college",
        ],
        section: SectionKind::Education,
    },
    KeywordGroup {
        keywords: &["skills", "competencies", "ability", "abilities"],
        section: SectionKind::Skills,
    },
    KeywordGroup {
        keywords: &["projects", "portfolio"],
        section: SectionKind::Projects,
    },
    KeywordGroup {
        keywords: &["certifications", "certificates", "license", "licenses"],
        section: SectionKind::Certifications,
    },
    KeywordGroup {
        keywords: &["award", "awards", "honors", "achievements"],
        section: SectionKind::Awards,
    },
    KeywordGroup {
        keywords: &["publications"],
        section: SectionKind::Publications,
    },
];

/// Maps already-lowercased text to the first section whose keywords occur in it.
pub fn canonical_section(lowered: &str) -> Option<SectionKind> {
    SECTION_KEYWORDS
        .iter()
        .find(|group| group.matches(lowered))
        .map(|group| group.section)
}
