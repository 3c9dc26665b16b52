use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::sections::keywords::SectionKind;

/// Section name → accumulated text for one document.
///
/// Repeated headings for the same section are merged in discovery order,
/// newline-separated. Iteration follows canonical declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<SectionKind, String>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> {
        self.sections.iter().map(|(kind, text)| (*kind, text.as_str()))
    }

    /// Stores `content` verbatim, appending after a newline if the section
    /// already exists. Empty content still marks the section as present.
    pub fn merge(&mut self, kind: SectionKind, content: &str) {
        match self.sections.get_mut(&kind) {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(content);
            }
            None => {
                self.sections.insert(kind, content.to_string());
            }
        }
    }

    /// Trims `content` and drops it if nothing is left. Otherwise appends to a
    /// non-empty existing entry (right-trimmed first) or sets it fresh.
    pub fn merge_block(&mut self, kind: SectionKind, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }

        match self.sections.get_mut(&kind) {
            Some(existing) if !existing.is_empty() => {
                existing.truncate(existing.trim_end().len());
                existing.push('\n');
                existing.push_str(content);
            }
            _ => {
                self.sections.insert(kind, content.to_string());
            }
        }
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (kind, text) in self.iter() {
            map.serialize_entry(kind.as_str(), text)?;
        }
        map.end()
    }
}
