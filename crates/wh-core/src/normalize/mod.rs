//! Reconciliation of character JSON into the canonical schema.
//!
//! Input arrives from producers that name the same fields differently.
//! Rather than deserializing it directly, the untyped tree is rewritten
//! field by field: the canonical key is read first, then any legacy alias,
//! then a fixed default. Unknown keys are dropped and wrong-typed values
//! are treated as missing, so any JSON object normalizes without error.
//! Only a top-level value that is neither an object nor an array of
//! objects is passed through untouched, leaving the decode step to reject it.

mod dialect;
mod equipment;
pub mod fields;
mod options;

pub use dialect::Dialect;
pub use fields::Fields;

use serde_json::{Map, Value, json};
use tracing::{debug, warn};
use wh_rules::{CharacterClass, MAX_LEVEL, MIN_LEVEL};

use crate::character::{
    DEFAULT_ATTACK_VALUE, DEFAULT_ATTRIBUTE, DEFAULT_HP, DEFAULT_MAX_ENCUMBRANCE,
    DEFAULT_MOVEMENT, MAX_ATTRIBUTE, MIN_ATTRIBUTE,
};

/// Normalize a character object or an array of character objects.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            debug!(dialect = %Dialect::detect(value), "normalizing character");
            normalize_character(map)
        }
        Value::Array(items) if items.iter().all(Value::is_object) => {
            debug!(
                dialect = %Dialect::detect(value),
                count = items.len(),
                "normalizing character list"
            );
            Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(normalize_character)
                    .collect(),
            )
        }
        other => {
            warn!("payload is not a character object or array of objects; left unchanged");
            other.clone()
        }
    }
}

/// Normalize one character object into a canonical character object.
pub fn normalize_character(map: &Map<String, Value>) -> Value {
    let f = Fields::new(map);

    let use_custom_attributes = f
        .opt_bool(&["useCustomAttributes"])
        .or_else(|| f.opt_bool(&["useDefaultAttributes"]).map(|default| !default))
        .unwrap_or(false);

    let class = f
        .opt_string(&["characterClass", "class"])
        .and_then(|c| CharacterClass::from_tag(&c))
        .unwrap_or_default();

    let attribute = |key: &str| {
        f.clamped_int(
            &[key],
            i64::from(DEFAULT_ATTRIBUTE),
            i64::from(MIN_ATTRIBUTE),
            i64::from(MAX_ATTRIBUTE),
        )
    };

    let custom_attributes: Vec<Value> = f
        .objects(&["customAttributes"])
        .unwrap_or_default()
        .into_iter()
        .map(|a| {
            json!({
                "id": a.id(),
                "name": a.string(&["name"], ""),
                "value": a.int(&["value"], i64::from(DEFAULT_ATTRIBUTE)),
            })
        })
        .collect();

    let attribute_group_pairs: Vec<Value> = f
        .objects(&["attributeGroupPairs"])
        .unwrap_or_default()
        .into_iter()
        .map(|p| {
            json!({
                "id": p.id(),
                "attribute": p.string(&["attribute"], ""),
                "group": p.string(&["group"], ""),
            })
        })
        .collect();

    let weapons: Vec<Value> = f
        .objects(&["weapons"])
        .unwrap_or_default()
        .into_iter()
        .map(equipment::weapon)
        .collect();
    let armor: Vec<Value> = f
        .objects(&["armor"])
        .unwrap_or_default()
        .into_iter()
        .map(equipment::armor)
        .collect();
    let gear: Vec<Value> = f
        .objects(&["gear"])
        .unwrap_or_default()
        .into_iter()
        .map(equipment::gear)
        .collect();

    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "playerName": f.string(&["playerName"], ""),
        "characterClass": class.tag(),
        "level": f.clamped_int(&["level"], 1, i64::from(MIN_LEVEL), i64::from(MAX_LEVEL)),

        "strength": attribute("strength"),
        "agility": attribute("agility"),
        "toughness": attribute("toughness"),
        "intelligence": attribute("intelligence"),
        "willpower": attribute("willpower"),
        "charisma": attribute("charisma"),
        "useCustomAttributes": use_custom_attributes,
        "customAttributes": custom_attributes,

        "currentHP": f.int(&["currentHP"], DEFAULT_HP),
        "maxHP": f.int(&["maxHP"], DEFAULT_HP),
        "_attackValue": f.int(&["_attackValue"], DEFAULT_ATTACK_VALUE),
        "defenseValue": f.int(&["defenseValue"], 0),
        "movement": f.int(&["movement"], DEFAULT_MOVEMENT),

        "speciesGroup": f.string(&["speciesGroup", "species"], ""),
        "vocationGroup": f.string(&["vocationGroup", "vocation"], ""),
        "affiliationGroups": f.strings(&["affiliationGroups", "affiliations"]),
        "attributeGroupPairs": attribute_group_pairs,

        "coins": f.int(&["coins"], 0),
        "stashedCoins": f.int(&["stashedCoins"], 0),
        "experience": f.int(&["experience"], 0),
        "corruption": f.int(&["corruption"], 0),
        "comebackDice": f.int(&["comebackDice"], 0),
        "hasUsedSayNo": f.bool(&["hasUsedSayNo"], false),

        "weapons": weapons,
        "armor": armor,
        "gear": gear,
        "inventory": f.strings(&["inventory"]),
        "currentEncumbrance": f.int(&["currentEncumbrance"], 0),
        "maxEncumbrance": f.int(&["maxEncumbrance"], DEFAULT_MAX_ENCUMBRANCE),
        "notes": f.string(&["notes"], ""),
        "languages": f.strings(&["languages"]),

        "attunementSlots": options::attunement_slots(&f),
        "miracleSlots": options::miracle_slots(&f),
        "strongCombatOptions": options::strong_combat_options(f.object_or_empty(&["strongCombatOptions"])),
        "braveQuirkOptions": options::brave_quirk_options(f.object_or_empty(&["braveQuirkOptions"])),
        "cleverKnackOptions": options::clever_knack_options(f.object_or_empty(&["cleverKnackOptions"])),
        "fortunateOptions": options::fortunate_options(f.object_or_empty(&["fortunateOptions"])),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::character::Character;

    fn norm(value: Value) -> Value {
        normalize(&value)
    }

    #[test]
    fn empty_object_gets_every_default() {
        let out = norm(json!({}));
        for key in [
            "weapons",
            "armor",
            "gear",
            "languages",
            "inventory",
            "affiliationGroups",
            "customAttributes",
            "attributeGroupPairs",
        ] {
            assert_eq!(out[key], json!([]), "{key}");
        }
        assert_eq!(out["fortunateOptions"]["retainers"], json!([]));
        assert_eq!(out["useCustomAttributes"], false);
        assert_eq!(out["level"], 1);
        assert_eq!(out["currentHP"], 1);
        assert_eq!(out["maxHP"], 1);
        assert_eq!(out["maxEncumbrance"], 15);
        assert_eq!(out["characterClass"], "deft");
        assert!(out["id"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn empty_object_decodes() {
        let c: Character = serde_json::from_value(norm(json!({}))).unwrap();
        assert_eq!(c.attunement_slots.len(), 1);
        assert_eq!(c.miracle_slots.len(), 1);
        assert_eq!(c.brave_quirk_options.quirk_slots.len(), 10);
        assert_eq!(c.clever_knack_options.knack_slots.len(), 10);
        assert_eq!(c.strong_combat_options.slots, vec![None; 10]);
        assert!(c.strong_combat_options.conflict_loot.is_none());
    }

    #[test]
    fn legacy_dialect_fields() {
        let out = norm(json!({"species": "Elf", "useDefaultAttributes": false}));
        assert_eq!(out["speciesGroup"], "Elf");
        assert_eq!(out["useCustomAttributes"], true);

        let out = norm(json!({"vocation": "Smith", "affiliations": ["Guild"]}));
        assert_eq!(out["vocationGroup"], "Smith");
        assert_eq!(out["affiliationGroups"], json!(["Guild"]));
    }

    #[test]
    fn canonical_names_take_precedence() {
        let out = norm(json!({
            "speciesGroup": "Dwarf",
            "species": "Elf",
            "useCustomAttributes": false,
            "useDefaultAttributes": false,
        }));
        assert_eq!(out["speciesGroup"], "Dwarf");
        assert_eq!(out["useCustomAttributes"], false);
    }

    #[test]
    fn unknown_fields_dropped() {
        let out = norm(json!({"name": "Ilsa", "favoriteColor": "green"}));
        assert_eq!(out["name"], "Ilsa");
        assert!(out.get("favoriteColor").is_none());
    }

    #[test]
    fn wrong_typed_fields_get_defaults() {
        let out = norm(json!({"level": "high", "weapons": "sword", "notes": 12}));
        assert_eq!(out["level"], 1);
        assert_eq!(out["weapons"], json!([]));
        assert_eq!(out["notes"], "");
    }

    #[test]
    fn level_and_attributes_clamped() {
        let out = norm(json!({"level": 14, "strength": 30, "charisma": 0}));
        assert_eq!(out["level"], 10);
        assert_eq!(out["strength"], 18);
        assert_eq!(out["charisma"], 3);
    }

    #[test]
    fn class_accepts_any_casing_and_alias() {
        assert_eq!(norm(json!({"characterClass": "Strong"}))["characterClass"], "strong");
        assert_eq!(norm(json!({"class": "WISE"}))["characterClass"], "wise");
        assert_eq!(norm(json!({"class": "Bard"}))["characterClass"], "deft");
    }

    #[test]
    fn attunement_type_uppercase_normalized() {
        let out = norm(json!({"attunementSlots": [{"primaryAttunement": {"type": "SPELL"}}]}));
        assert_eq!(out["attunementSlots"][0]["primaryAttunement"]["type"], "spell");
        assert_eq!(out["attunementSlots"][0]["secondaryAttunement"]["type"], "item");
    }

    #[test]
    fn conflict_loot_null_preserved() {
        let out = norm(json!({"strongCombatOptions": {"conflictLoot": null}}));
        assert!(out["strongCombatOptions"]["conflictLoot"].is_null());
    }

    #[test]
    fn array_of_objects_normalized() {
        let out = norm(json!([{"name": "A"}, {"name": "B"}]));
        let items = out.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "B");
        assert_eq!(items[0]["maxEncumbrance"], 15);
    }

    #[test]
    fn non_normalizable_input_returned_unchanged() {
        for input in [json!(3), json!("text"), json!(null), json!([{"name": "A"}, 5])] {
            assert_eq!(normalize(&input), input);
        }
    }

    #[test]
    fn missing_ids_are_minted_fresh_each_time() {
        let a = norm(json!({}));
        let b = norm(json!({}));
        assert_ne!(a["id"], b["id"]);
    }

    #[test]
    fn canonical_input_is_a_fixed_point() {
        let mut c = Character::new("Ilsa", CharacterClass::Wise);
        c.species_group = "Human".into();
        c.weapons.push(crate::character::Weapon {
            name: "Staff".into(),
            ..Default::default()
        });
        c.strong_combat_options.slots[2] = Some(4);
        c.strong_combat_options.conflict_loot = Some(crate::character::ConflictLoot {
            keyword: "Banner".into(),
            ..Default::default()
        });
        c.brave_quirk_options.quirk_slots[0].quirk = Some("Fearless".into());

        let exported = serde_json::to_value(&c).unwrap();
        let renormalized = normalize(&exported);
        assert_eq!(renormalized, exported);

        let back: Character = serde_json::from_value(renormalized).unwrap();
        assert_eq!(back, c);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("level".to_string()),
                        Just("weapons".to_string()),
                        Just("quirkSlots".to_string()),
                        Just("conflictLoot".to_string()),
                        Just("type".to_string()),
                        "[a-z]{1,6}",
                    ],
                    inner,
                    0..5
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map(
            prop_oneof![
                Just("level".to_string()),
                Just("species".to_string()),
                Just("weapons".to_string()),
                Just("attunementSlots".to_string()),
                Just("strongCombatOptions".to_string()),
                Just("braveQuirkOptions".to_string()),
                Just("fortunateOptions".to_string()),
                Just("useDefaultAttributes".to_string()),
                "[a-zA-Z]{1,8}",
            ],
            arb_json(),
            0..8,
        )
        .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn any_object_normalizes_and_decodes(map in arb_object()) {
            let out = normalize_character(&map);
            let decoded: Result<Character, _> = serde_json::from_value(out);
            prop_assert!(decoded.is_ok());
        }

        #[test]
        fn normalization_is_idempotent(map in arb_object()) {
            let once = normalize_character(&map);
            let twice = normalize(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
