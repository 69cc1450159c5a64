//! Core person record for kintree.
//!
//! This module defines the person record as it appears in the family tree
//! document, plus the parsing rules for the interactively entered fields.

use serde::{Deserialize, Serialize};

/// One person record in the family tree document.
///
/// Relationship lists hold the ids of other records, not references; looking
/// one up is always a scan of the loaded document. Field declaration order is
/// load-bearing: it fixes the key order in the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Caller-assigned identifier. Uniqueness is not enforced.
    pub id: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Whether the person is alive.
    pub alive: bool,

    /// Free-text gender.
    pub gender: String,

    /// Ids of this person's parents.
    #[serde(default)]
    pub parents: Vec<String>,

    /// Ids of this person's spouses.
    #[serde(default)]
    pub spouses: Vec<String>,

    /// Ids of this person's children.
    #[serde(default)]
    pub children: Vec<String>,

    /// Identifier of the family the person was born into.
    pub birth_family_id: String,

    /// Identifier of the family the person currently belongs to.
    pub current_family_id: String,
}

impl Person {
    /// The person's full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether this record references the given id as a parent,
    /// spouse, or child.
    #[must_use]
    pub fn references(&self, id: &str) -> bool {
        self.parents.iter().any(|p| p == id)
            || self.spouses.iter().any(|s| s == id)
            || self.children.iter().any(|c| c == id)
    }
}

/// Parse a comma-separated id list.
///
/// Tokens are trimmed, empty tokens are dropped, and order is preserved:
/// `" A, B ,,C "` becomes `["A", "B", "C"]`.
#[must_use]
pub fn parse_id_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Map a yes/no answer to a boolean.
///
/// Exactly a case-insensitive `"yes"` is `true`; anything else, including
/// the empty string, is `false`.
#[must_use]
pub fn parse_alive(input: &str) -> bool {
    input.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person {
            id: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            alive: false,
            gender: "female".to_string(),
            parents: vec!["byron".to_string()],
            spouses: vec![],
            children: vec![],
            birth_family_id: "familyByron".to_string(),
            current_family_id: "familyLovelace".to_string(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_person().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_references() {
        let person = sample_person();
        assert!(person.references("byron"));
        assert!(!person.references("ada"));
        assert!(!person.references("nobody"));
    }

    #[test]
    fn test_parse_id_list_trims_and_drops_empties() {
        assert_eq!(parse_id_list(" A, B ,,C "), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_id_list_blank_input() {
        assert!(parse_id_list("").is_empty());
        assert!(parse_id_list("   ").is_empty());
        assert!(parse_id_list(",,,").is_empty());
    }

    #[test]
    fn test_parse_id_list_preserves_order() {
        assert_eq!(parse_id_list("c,a,b"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_alive_accepts_yes_case_insensitively() {
        assert!(parse_alive("yes"));
        assert!(parse_alive("Yes"));
        assert!(parse_alive("YES"));
    }

    #[test]
    fn test_parse_alive_rejects_everything_else() {
        assert!(!parse_alive("no"));
        assert!(!parse_alive("y"));
        assert!(!parse_alive(""));
        assert!(!parse_alive(" yes "));
        assert!(!parse_alive("true"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let person = sample_person();
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, back);
    }

    #[test]
    fn test_serialization_key_order() {
        let json = serde_json::to_string(&sample_person()).unwrap();
        let positions: Vec<usize> = [
            "\"id\"",
            "\"first_name\"",
            "\"last_name\"",
            "\"alive\"",
            "\"gender\"",
            "\"parents\"",
            "\"spouses\"",
            "\"children\"",
            "\"birth_family_id\"",
            "\"current_family_id\"",
        ]
        .iter()
        .map(|key| json.find(key).expect("missing key"))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_deserialization_defaults_missing_lists() {
        let json = r#"{
            "id": "x",
            "first_name": "X",
            "last_name": "Y",
            "alive": true,
            "gender": "male",
            "birth_family_id": "f1",
            "current_family_id": "f1"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.parents.is_empty());
        assert!(person.spouses.is_empty());
        assert!(person.children.is_empty());
    }
}
