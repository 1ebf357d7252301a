use crate::bank::LoadError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Unit label assigned to questions whose topic tag has no table entry.
pub const FALLBACK_UNIT: &str = "Miscellaneous";

/// The topic-tag → unit mapping used to group questions in the study menu.
///
/// Supplied as external configuration: a JSON object mapping each unit label
/// to the topic tags that belong to it. Without a table, every topic tag is
/// its own unit.
#[derive(Debug, Clone)]
pub enum UnitTable {
    /// Unit label == topic tag.
    Identity,
    /// Inverted lookup: topic tag → unit label.
    Mapped(HashMap<String, String>),
}

impl UnitTable {
    pub fn identity() -> Self {
        UnitTable::Identity
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses `{ "Unit label": ["tag", ...], ... }`. A tag listed under two
    /// units resolves to whichever entry wins the final insert; bank data is
    /// expected to keep tags disjoint.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let table: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
        let mut by_tag = HashMap::new();
        for (unit, tags) in table {
            for tag in tags {
                by_tag.insert(tag, unit.clone());
            }
        }
        Ok(UnitTable::Mapped(by_tag))
    }

    pub fn unit_for(&self, tag: &str) -> String {
        match self {
            UnitTable::Identity => tag.to_string(),
            UnitTable::Mapped(by_tag) => by_tag
                .get(tag)
                .cloned()
                .unwrap_or_else(|| FALLBACK_UNIT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_maps_tag_to_itself() {
        let table = UnitTable::identity();
        assert_eq!(table.unit_for("Security"), "Security");
        assert_eq!(table.unit_for(""), "");
    }

    #[test]
    fn test_mapped_lookup() {
        let table = UnitTable::from_json(
            r#"{
                "Security & Access": ["Security", "Access Control"],
                "Data Management": ["Data Model", "Imports"]
            }"#,
        )
        .unwrap();
        assert_eq!(table.unit_for("Security"), "Security & Access");
        assert_eq!(table.unit_for("Access Control"), "Security & Access");
        assert_eq!(table.unit_for("Imports"), "Data Management");
    }

    #[test]
    fn test_mapped_falls_back_for_unknown_tag() {
        let table = UnitTable::from_json(r#"{"Security & Access": ["Security"]}"#).unwrap();
        assert_eq!(table.unit_for("Something Else"), FALLBACK_UNIT);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = UnitTable::from_json("not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = UnitTable::from_file("no/such/units.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
