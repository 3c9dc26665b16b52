//! Contact details pulled from raw resume text with plain regexes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::PersonalInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid phone regex"));

/// Name is a guess: the first non-blank line of the document, trimmed.
pub fn parse_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string(),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_fields() {
        let text = "  Jane Doe  \njane.doe+cv@example.co.uk | (555) 123-4567\nSkills";
        let info = parse_personal_info(text);
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.email.as_deref(), Some("jane.doe+cv@example.co.uk"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_first_match_wins() {
        let text = "A\na@one.com b@two.com\n555.111.2222 555-333-4444";
        let info = parse_personal_info(text);
        assert_eq!(info.email.as_deref(), Some("a@one.com"));
        assert_eq!(info.phone.as_deref(), Some("555.111.2222"));
    }

    #[test]
    fn test_missing_contact_details_are_absent() {
        let info = parse_personal_info("Jane Doe\nSoftware Engineer");
        assert_eq!(info.email, None);
        assert_eq!(info.phone, None);
    }

    #[test]
    fn test_unseparated_phone_digits() {
        let info = parse_personal_info("Call 5551234567 today");
        assert_eq!(info.phone.as_deref(), Some("5551234567"));
    }

    #[test]
    fn test_name_skips_leading_blank_lines() {
        let info = parse_personal_info("\n\n  \nJane Doe\n\nEXPERIENCE\nAcme");
        assert_eq!(info.name, "Jane Doe");
    }

    #[test]
    fn test_name_empty_for_blank_text() {
        assert_eq!(parse_personal_info("").name, "");
        assert_eq!(parse_personal_info("\n \n\t").name, "");
    }
}
