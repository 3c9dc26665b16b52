//! Reshapes a parsed resume into the fixed profile payload the onboarding
//! frontend consumes.

use serde::Serialize;

use crate::models::resume::ParsedResume;
use crate::sections::{SectionKind, SectionMap};

pub const MAX_HIGHLIGHTS: usize = 10;
pub const MAX_SKILLS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<ParsedResume> for ProfileResponse {
    fn from(parsed: ParsedResume) -> Self {
        let ParsedResume {
            personal_info,
            sections,
        } = parsed;

        let highlights = section_lines(&sections, SectionKind::Experience);
        let education_lines = section_lines(&sections, SectionKind::Education);

        let experience = if highlights.is_empty() {
            vec![]
        } else {
            vec![ExperienceItem {
                id: "1".to_string(),
                company: String::new(),
                role: String::new(),
                start_date: String::new(),
                end_date: String::new(),
                highlights: highlights.into_iter().take(MAX_HIGHLIGHTS).collect(),
            }]
        };

        // The first Education line stands in for both school and degree.
        let education = match education_lines.first() {
            Some(first) => vec![EducationItem {
                id: "1".to_string(),
                school: first.clone(),
                degree: first.clone(),
                start_date: String::new(),
                end_date: String::new(),
            }],
            None => vec![],
        };

        let mut skills = extract_skills(sections.get(SectionKind::Skills).unwrap_or_default());
        skills.truncate(MAX_SKILLS);

        ProfileResponse {
            profile: Profile {
                name: personal_info.name,
                headline: headline(&sections),
                location: String::new(),
                email: personal_info.email.unwrap_or_default(),
                phone: personal_info.phone.unwrap_or_default(),
            },
            experience,
            education,
            skills,
        }
    }
}

/// Splits a skills block on newlines, commas, semicolons, bullets and hyphens.
pub fn extract_skills(skills_text: &str) -> Vec<String> {
    skills_text
        .split(|c: char| matches!(c, '\n' | ',' | ';' | '•' | '-'))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn headline(sections: &SectionMap) -> String {
    sections
        .get(SectionKind::Summary)
        .and_then(|summary| summary.lines().next())
        .unwrap_or_default()
        .to_string()
}

fn section_lines(sections: &SectionMap, kind: SectionKind) -> Vec<String> {
    sections
        .get(kind)
        .map(|text| text.lines().map(String::from).collect())
        .unwrap_or_default()
}
