use serde::Serialize;

use crate::sections::SectionMap;

/// Contact details guessed from the raw text. Independent of section parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The full record persisted by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,
    pub sections: SectionMap,
}
