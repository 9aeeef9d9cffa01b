use serde_json::{Value, json};

use super::fields::{Fields, as_int};
use crate::character::{AttunementType, DEFAULT_MOVEMENT, FIXED_SLOT_COUNT};

/// Pad or cut a slot list to exactly [`FIXED_SLOT_COUNT`] entries.
fn fixed_count(mut slots: Vec<Value>, fill: impl FnMut() -> Value) -> Vec<Value> {
    slots.resize_with(FIXED_SLOT_COUNT, fill);
    slots
}

fn attunement(f: Fields<'_>) -> Value {
    let kind = f
        .opt_string(&["type"])
        .and_then(|t| AttunementType::from_tag(&t))
        .unwrap_or_default();
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "type": kind.tag(),
        "isActive": f.bool(&["isActive"], false),
        "isLost": f.bool(&["isLost"], false),
    })
}

fn attunement_slot(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "primaryAttunement": attunement(f.object_or_empty(&["primaryAttunement"])),
        "secondaryAttunement": attunement(f.object_or_empty(&["secondaryAttunement"])),
        "tertiaryAttunement": attunement(f.object_or_empty(&["tertiaryAttunement"])),
        "quaternaryAttunement": attunement(f.object_or_empty(&["quaternaryAttunement"])),
        "hasUsedDailyPower": f.bool(&["hasUsedDailyPower"], false),
    })
}

/// Attunement slots; an absent, malformed or empty list becomes one default slot.
pub(super) fn attunement_slots(f: &Fields<'_>) -> Vec<Value> {
    match f.objects(&["attunementSlots"]) {
        Some(slots) if !slots.is_empty() => slots.into_iter().map(attunement_slot).collect(),
        _ => vec![attunement_slot(Fields::empty())],
    }
}

fn miracle(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "isActive": f.bool(&["isActive"], false),
    })
}

fn miracle_slot(f: Fields<'_>) -> Value {
    let miracles: Vec<Value> = f
        .objects(&["miracles", "baseMiracles"])
        .unwrap_or_default()
        .into_iter()
        .map(miracle)
        .collect();
    json!({
        "id": f.id(),
        "miracles": miracles,
        "isMagicItemSlot": f.bool(&["isMagicItemSlot", "isMagicItem"], false),
        "magicItemName": f.string(&["magicItemName"], ""),
    })
}

/// Miracle slots; an absent, malformed or empty list becomes one default slot.
pub(super) fn miracle_slots(f: &Fields<'_>) -> Vec<Value> {
    match f.objects(&["miracleSlots"]) {
        Some(slots) if !slots.is_empty() => slots.into_iter().map(miracle_slot).collect(),
        _ => vec![miracle_slot(Fields::empty())],
    }
}

/// A combat option slot: an integer, a numeric string, or null.
fn combat_option(value: &Value) -> Value {
    let parsed = match value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        other => as_int(other),
    };
    parsed.map_or(Value::Null, Value::from)
}

fn conflict_loot(f: &Fields<'_>) -> Value {
    match f.object(&["conflictLoot"]) {
        Some(loot) => json!({
            "keyword": loot.string(&["keyword"], ""),
            "type": loot.string(&["type"], "object").to_lowercase(),
            "usesRemaining": loot.int(&["usesRemaining"], 0),
        }),
        None => Value::Null,
    }
}

pub(super) fn strong_combat_options(f: Fields<'_>) -> Value {
    let slots: Vec<Value> = f
        .array(&["slots", "combatOptions"])
        .map(|values| values.iter().map(combat_option).collect())
        .unwrap_or_default();
    json!({
        "slots": fixed_count(slots, || Value::Null),
        "conflictLoot": conflict_loot(&f),
    })
}

fn quirk_slot(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "quirk": f.opt_string(&["quirk"]),
        "protectedAllyName": f.string(&["protectedAllyName"], ""),
    })
}

pub(super) fn brave_quirk_options(f: Fields<'_>) -> Value {
    let slots: Vec<Value> = f
        .objects(&["quirkSlots"])
        .unwrap_or_default()
        .into_iter()
        .map(quirk_slot)
        .collect();
    json!({
        "quirkSlots": fixed_count(slots, || quirk_slot(Fields::empty())),
        "hasUsedSayNoPower": f.bool(&["hasUsedSayNoPower"], false),
    })
}

fn knack_slot(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "knack": f.opt_string(&["knack"]),
    })
}

pub(super) fn clever_knack_options(f: Fields<'_>) -> Value {
    let slots: Vec<Value> = f
        .objects(&["knackSlots"])
        .unwrap_or_default()
        .into_iter()
        .map(knack_slot)
        .collect();
    json!({
        "knackSlots": fixed_count(slots, || knack_slot(Fields::empty())),
        "hasUsedUnorthodoxBonus": f.bool(&["hasUsedUnorthodoxBonus"], false),
    })
}

fn retainer(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "class": f.string(&["class"], ""),
        "hitDice": f.string(&["hitDice"], "1"),
        "defenseValue": f.int(&["defenseValue", "defense"], 0),
        "movement": f.int(&["movement"], DEFAULT_MOVEMENT),
        "keywords": f.strings(&["keywords"]),
        "notes": f.string(&["notes"], ""),
    })
}

pub(super) fn fortunate_options(f: Fields<'_>) -> Value {
    let retainers: Vec<Value> = f
        .objects(&["retainers"])
        .unwrap_or_default()
        .into_iter()
        .map(retainer)
        .collect();
    let signature = f.object_or_empty(&["signatureObject"]);
    json!({
        "standing": f.string(&["standing"], ""),
        "hasUsedFortune": f.bool(&["hasUsedFortune"], false),
        "signatureObject": { "name": signature.string(&["name"], "") },
        "retainers": retainers,
    })
}
