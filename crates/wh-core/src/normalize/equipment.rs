use serde_json::{Value, json};

use super::fields::Fields;
use crate::character::Weight;

fn weight(f: &Fields<'_>, default: Weight) -> &'static str {
    f.opt_string(&["weight"])
        .and_then(|w| Weight::from_tag(&w))
        .unwrap_or(default)
        .tag()
}

pub(super) fn weapon(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "damage": f.string(&["damage"], "1d6"),
        "weight": weight(&f, Weight::Regular),
        "range": f.string(&["range"], ""),
        "rateOfFire": f.string(&["rateOfFire"], ""),
        "special": f.string(&["special"], ""),
        "quantity": f.int(&["quantity"], 1),
        "bonus": f.int(&["bonus"], 0),
        "isEquipped": f.bool(&["isEquipped"], false),
        "isStashed": f.bool(&["isStashed"], false),
        "isMagical": f.bool(&["isMagical"], false),
        "isCursed": f.bool(&["isCursed"], false),
    })
}

pub(super) fn armor(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "defenseValue": f.int(&["defenseValue", "defense"], 0),
        "weight": weight(&f, Weight::Regular),
        "isShield": f.bool(&["isShield"], false),
        "bonus": f.int(&["bonus"], 0),
        "isEquipped": f.bool(&["isEquipped"], false),
        "isStashed": f.bool(&["isStashed"], false),
        "isMagical": f.bool(&["isMagical"], false),
        "isCursed": f.bool(&["isCursed"], false),
    })
}

pub(super) fn gear(f: Fields<'_>) -> Value {
    json!({
        "id": f.id(),
        "name": f.string(&["name"], ""),
        "weight": weight(&f, Weight::Minor),
        "quantity": f.int(&["quantity"], 1),
        "isContainer": f.bool(&["isContainer"], false),
        "bonus": f.int(&["bonus"], 0),
        "isEquipped": f.bool(&["isEquipped"], false),
        "isStashed": f.bool(&["isStashed"], false),
        "isMagical": f.bool(&["isMagical"], false),
        "isCursed": f.bool(&["isCursed"], false),
    })
}
