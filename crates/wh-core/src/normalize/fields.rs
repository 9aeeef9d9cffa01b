//! Alias-aware typed lookups over an untyped JSON object.
//!
//! Every accessor takes a list of keys, canonical first and legacy aliases
//! after. The first key holding a value of the right type wins; `null` and
//! wrong-typed values are skipped as if absent.

use std::sync::OnceLock;

use serde_json::{Map, Value};
use uuid::Uuid;

/// Read-only view over one JSON object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap an object.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Wrap a value if it is an object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// An empty view, for blocks that are missing entirely.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<Map<String, Value>> = OnceLock::new();
        Self::new(EMPTY.get_or_init(Map::new))
    }

    fn find<T>(&self, keys: &[&str], convert: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
        keys.iter()
            .filter_map(|k| self.map.get(*k))
            .find_map(convert)
    }

    /// A string, if one is present under any key.
    pub fn opt_string(&self, keys: &[&str]) -> Option<String> {
        self.find(keys, |v| v.as_str().map(str::to_string))
    }

    /// A string, or `default`.
    pub fn string(&self, keys: &[&str], default: &str) -> String {
        self.opt_string(keys)
            .unwrap_or_else(|| default.to_string())
    }

    /// An integer, if a number is present under any key.
    ///
    /// Floating-point values are truncated toward zero.
    pub fn opt_int(&self, keys: &[&str]) -> Option<i64> {
        self.find(keys, as_int)
    }

    /// An integer, or `default`.
    pub fn int(&self, keys: &[&str], default: i64) -> i64 {
        self.opt_int(keys).unwrap_or(default)
    }

    /// An integer clamped to `min..=max`, or `default`.
    pub fn clamped_int(&self, keys: &[&str], default: i64, min: i64, max: i64) -> i64 {
        self.int(keys, default).clamp(min, max)
    }

    /// A boolean, if one is present under any key.
    pub fn opt_bool(&self, keys: &[&str]) -> Option<bool> {
        self.find(keys, Value::as_bool)
    }

    /// A boolean, or `default`.
    pub fn bool(&self, keys: &[&str], default: bool) -> bool {
        self.opt_bool(keys).unwrap_or(default)
    }

    /// A nested object.
    pub fn object(&self, keys: &[&str]) -> Option<Fields<'a>> {
        self.find(keys, Fields::from_value)
    }

    /// A nested object, or an empty view so every field takes its default.
    pub fn object_or_empty(&self, keys: &[&str]) -> Fields<'a> {
        self.object(keys).unwrap_or_else(Fields::empty)
    }

    /// An array of any values.
    pub fn array(&self, keys: &[&str]) -> Option<&'a Vec<Value>> {
        self.find(keys, Value::as_array)
    }

    /// An array in which every element is an object.
    ///
    /// An array holding anything else does not qualify, so the whole
    /// collection falls back to the next key or to empty.
    pub fn objects(&self, keys: &[&str]) -> Option<Vec<Fields<'a>>> {
        self.find(keys, |v| {
            v.as_array()?
                .iter()
                .map(Fields::from_value)
                .collect::<Option<Vec<_>>>()
        })
    }

    /// An array in which every element is a string, or empty.
    pub fn strings(&self, keys: &[&str]) -> Vec<String> {
        self.find(keys, |v| {
            v.as_array()?
                .iter()
                .map(|s| s.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_default()
    }

    /// The `id` as a canonical UUID string, minted fresh when absent or unparseable.
    pub fn id(&self) -> String {
        self.opt_string(&["id"])
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .unwrap_or_else(Uuid::new_v4)
            .to_string()
    }
}

/// Read a JSON number as an integer, truncating fractions.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: &Value) -> Fields<'_> {
        Fields::from_value(value).unwrap()
    }

    #[test]
    fn canonical_key_wins_over_alias() {
        let v = json!({"speciesGroup": "Dwarf", "species": "Elf"});
        assert_eq!(fields(&v).string(&["speciesGroup", "species"], ""), "Dwarf");
    }

    #[test]
    fn alias_used_when_canonical_missing() {
        let v = json!({"species": "Elf"});
        assert_eq!(fields(&v).string(&["speciesGroup", "species"], ""), "Elf");
    }

    #[test]
    fn default_when_neither_present() {
        let v = json!({});
        assert_eq!(fields(&v).string(&["speciesGroup", "species"], "-"), "-");
        assert_eq!(fields(&v).int(&["level"], 1), 1);
        assert!(!fields(&v).bool(&["isCursed"], false));
    }

    #[test]
    fn wrong_type_counts_as_absent() {
        let v = json!({"speciesGroup": 7, "species": "Elf", "level": "three", "flag": "yes"});
        let f = fields(&v);
        assert_eq!(f.string(&["speciesGroup", "species"], ""), "Elf");
        assert_eq!(f.int(&["level"], 1), 1);
        assert!(f.bool(&["flag"], true));
    }

    #[test]
    fn null_counts_as_absent() {
        let v = json!({"vocationGroup": null, "vocation": "Smith"});
        assert_eq!(fields(&v).string(&["vocationGroup", "vocation"], ""), "Smith");
        assert!(fields(&v).opt_string(&["vocationGroup"]).is_none());
    }

    #[test]
    fn floats_truncate_to_int() {
        let v = json!({"coins": 12.0, "xp": 99.9});
        assert_eq!(fields(&v).int(&["coins"], 0), 12);
        assert_eq!(fields(&v).int(&["xp"], 0), 99);
    }

    #[test]
    fn clamped_int() {
        let v = json!({"strength": 25, "agility": 1});
        let f = fields(&v);
        assert_eq!(f.clamped_int(&["strength"], 10, 3, 18), 18);
        assert_eq!(f.clamped_int(&["agility"], 10, 3, 18), 3);
        assert_eq!(f.clamped_int(&["toughness"], 10, 3, 18), 10);
    }

    #[test]
    fn objects_rejects_mixed_arrays() {
        let v = json!({"weapons": [{"name": "Axe"}, 3], "armor": [{"name": "Mail"}]});
        let f = fields(&v);
        assert!(f.objects(&["weapons"]).is_none());
        assert_eq!(f.objects(&["armor"]).map(|a| a.len()), Some(1));
    }

    #[test]
    fn strings_all_or_nothing() {
        let v = json!({"languages": ["Common", "Elvish"], "inventory": ["rope", 1]});
        let f = fields(&v);
        assert_eq!(f.strings(&["languages"]), vec!["Common", "Elvish"]);
        assert!(f.strings(&["inventory"]).is_empty());
        assert!(f.strings(&["missing"]).is_empty());
    }

    #[test]
    fn id_preserved_or_minted() {
        let v = json!({"id": "A3F2B1C8-1234-5678-9ABC-DEF012345678"});
        assert_eq!(fields(&v).id(), "a3f2b1c8-1234-5678-9abc-def012345678");

        let bad = json!({"id": "not-a-uuid"});
        let minted = fields(&bad).id();
        assert!(Uuid::parse_str(&minted).is_ok());

        let none = json!({});
        assert_ne!(fields(&none).id(), fields(&none).id());
    }
}
