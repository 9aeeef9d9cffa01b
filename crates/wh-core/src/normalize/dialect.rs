//! Best-effort detection of which producer wrote a payload.
//!
//! Detection is advisory. It is logged for diagnosis, but every field is
//! resolved independently, so a wrong guess never changes the output.

use std::fmt;

use serde_json::Value;

const CANONICAL_MARKERS: &[&str] = &[
    "speciesGroup",
    "vocationGroup",
    "useCustomAttributes",
    "affiliationGroups",
    "_attackValue",
];

const LEGACY_MARKERS: &[&str] = &["species", "vocation", "useDefaultAttributes", "affiliations"];

/// A naming convention for character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `speciesGroup` / `vocationGroup` / `useCustomAttributes`, with `_attackValue`.
    Canonical,
    /// `species` / `vocation` / `useDefaultAttributes`.
    Legacy,
    /// Neither set of marker fields is present.
    Unknown,
}

impl Dialect {
    /// Guess the dialect of a character object, or of the first object in an array.
    pub fn detect(value: &Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            Value::Array(items) => match items.iter().find_map(Value::as_object) {
                Some(map) => map,
                None => return Self::Unknown,
            },
            _ => return Self::Unknown,
        };

        if CANONICAL_MARKERS.iter().any(|k| map.contains_key(*k)) {
            Self::Canonical
        } else if LEGACY_MARKERS.iter().any(|k| map.contains_key(*k)) {
            Self::Legacy
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Legacy => write!(f, "legacy"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_canonical() {
        let v = json!({"speciesGroup": "Human", "_attackValue": 10});
        assert_eq!(Dialect::detect(&v), Dialect::Canonical);
    }

    #[test]
    fn detects_legacy() {
        let v = json!({"species": "Elf", "useDefaultAttributes": true});
        assert_eq!(Dialect::detect(&v), Dialect::Legacy);
    }

    #[test]
    fn canonical_markers_win_on_mixed_input() {
        let v = json!({"species": "Elf", "vocationGroup": "Smith"});
        assert_eq!(Dialect::detect(&v), Dialect::Canonical);
    }

    #[test]
    fn arrays_use_first_object() {
        let v = json!([{"vocation": "Smith"}, {"speciesGroup": "Human"}]);
        assert_eq!(Dialect::detect(&v), Dialect::Legacy);
        assert_eq!(Dialect::detect(&json!([])), Dialect::Unknown);
        assert_eq!(Dialect::detect(&json!("text")), Dialect::Unknown);
        assert_eq!(Dialect::detect(&json!({"name": "Ilsa"})), Dialect::Unknown);
    }
}
