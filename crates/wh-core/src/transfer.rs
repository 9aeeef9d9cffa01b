//! Import and export of character JSON.
//!
//! Import accepts either one character object or an array of them, in any
//! known dialect. Export always writes the canonical array shape.

use serde_json::Value;
use tracing::debug;

use crate::character::Character;
use crate::error::{CoreError, CoreResult};
use crate::normalize::normalize;

/// Parse import text into canonical characters.
///
/// Fails with [`CoreError::InvalidFormat`] if the text is not JSON or not
/// an object or array of objects, and with [`CoreError::Json`] if the
/// normalized data still does not fit the typed entity.
pub fn parse_import(text: &str) -> CoreResult<Vec<Character>> {
    decode_characters(&parse_json(text)?)
}

/// Parse text as JSON, reporting failure as [`CoreError::InvalidFormat`].
pub(crate) fn parse_json(text: &str) -> CoreResult<Value> {
    serde_json::from_str(text).map_err(|e| CoreError::InvalidFormat(format!("not valid JSON: {e}")))
}

/// Normalize and decode an already-parsed JSON value.
pub fn decode_characters(value: &Value) -> CoreResult<Vec<Character>> {
    let is_list = match value {
        Value::Object(_) => false,
        Value::Array(items) if items.iter().all(Value::is_object) => true,
        _ => {
            return Err(CoreError::InvalidFormat(
                "expected a character object or an array of character objects".into(),
            ));
        }
    };

    let normalized = normalize(value);
    let characters = if is_list {
        serde_json::from_value::<Vec<Character>>(normalized)?
    } else {
        vec![serde_json::from_value::<Character>(normalized)?]
    };
    debug!(count = characters.len(), "decoded characters");
    Ok(characters)
}

/// Serialize characters as a pretty-printed canonical JSON array.
pub fn export_characters(characters: &[Character]) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(characters)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wh_rules::CharacterClass;

    #[test]
    fn single_object_imports_as_one() {
        let chars = parse_import(r#"{"name": "Ilsa", "class": "Wise"}"#).unwrap();
        assert_eq!(chars.len(), 1);
        assert_eq!(chars[0].name, "Ilsa");
        assert_eq!(chars[0].character_class, CharacterClass::Wise);
    }

    #[test]
    fn array_imports_all() {
        let chars = parse_import(r#"[{"name": "A"}, {"name": "B"}, {}]"#).unwrap();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[2].name, "");
    }

    #[test]
    fn empty_array_imports_nothing() {
        assert!(parse_import("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_invalid_format() {
        let err = parse_import("{ name: ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormat(_)));
    }

    #[test]
    fn wrong_top_level_shape_is_invalid_format() {
        for text in ["42", "\"hello\"", "null", "[1, 2]", r#"[{"name": "A"}, "B"]"#] {
            let err = parse_import(text).unwrap_err();
            assert!(matches!(err, CoreError::InvalidFormat(_)), "{text}");
        }
    }

    #[test]
    fn export_then_import_round_trips() {
        let mut a = Character::new("Ilsa", CharacterClass::Wise);
        a.languages = vec!["Common".into(), "Old Tongue".into()];
        a.fortunate_options.retainers.push(Default::default());
        let b = Character::new("Bron", CharacterClass::Strong);
        let originals = vec![a, b];

        let text = export_characters(&originals).unwrap();
        let back = parse_import(&text).unwrap();
        assert_eq!(back, originals);
        assert_eq!(export_characters(&back).unwrap(), text);
    }

    #[test]
    fn legacy_dialect_imports() {
        let text = r#"{
            "name": "Vesna",
            "class": "brave",
            "species": "Human",
            "vocation": "Sailor",
            "affiliations": ["Harbor Guild"],
            "useDefaultAttributes": true,
            "weapons": [{"name": "Cutlass", "isEquipped": true}]
        }"#;
        let c = parse_import(text).unwrap().remove(0);
        assert_eq!(c.species_group, "Human");
        assert_eq!(c.vocation_group, "Sailor");
        assert_eq!(c.affiliation_groups, vec!["Harbor Guild"]);
        assert!(!c.use_custom_attributes);
        assert!(c.weapons[0].is_equipped);
        assert_eq!(c.weapons[0].quantity, 1);
    }
}
