//! Class-specific option blocks.
//!
//! Every character carries all of these blocks; only the one matching the
//! character's class is meaningful. Keeping them on every record lets a
//! class change in the form keep whatever was entered before.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FIXED_SLOT_COUNT;

/// What an attunement is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttunementType {
    /// A physical object.
    #[default]
    Item,
    /// A word of power.
    Word,
    /// A spell.
    Spell,
    /// A place.
    Location,
    /// A person the character is not related to.
    Stranger,
    /// A living creature or plant.
    Organism,
}

impl AttunementType {
    /// Every attunement type.
    pub const ALL: [AttunementType; 6] = [
        Self::Item,
        Self::Word,
        Self::Spell,
        Self::Location,
        Self::Stranger,
        Self::Organism,
    ];

    /// The lowercase tag used in serialized data.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Word => "word",
            Self::Spell => "spell",
            Self::Location => "location",
            Self::Stranger => "stranger",
            Self::Organism => "organism",
        }
    }

    /// Parse a tag in any letter casing.
    pub fn from_tag(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.tag() == lower)
    }
}

/// A single attunement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attunement {
    /// Entry identifier.
    pub id: Uuid,
    /// Name of the attuned thing.
    pub name: String,
    /// What kind of thing it is.
    #[serde(rename = "type")]
    pub kind: AttunementType,
    /// Currently the active attunement of its slot.
    pub is_active: bool,
    /// Lost, and must be regained.
    pub is_lost: bool,
}

impl Default for Attunement {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            kind: AttunementType::Item,
            is_active: false,
            is_lost: false,
        }
    }
}

/// A slot holding four attunements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttunementSlot {
    /// Slot identifier.
    pub id: Uuid,
    /// First attunement.
    pub primary_attunement: Attunement,
    /// Second attunement.
    pub secondary_attunement: Attunement,
    /// Third attunement.
    pub tertiary_attunement: Attunement,
    /// Fourth attunement.
    pub quaternary_attunement: Attunement,
    /// The slot's once-per-day power has been used.
    pub has_used_daily_power: bool,
}

impl Default for AttunementSlot {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            primary_attunement: Attunement::default(),
            secondary_attunement: Attunement::default(),
            tertiary_attunement: Attunement::default(),
            quaternary_attunement: Attunement::default(),
            has_used_daily_power: false,
        }
    }
}

impl AttunementSlot {
    /// The four attunements in order.
    pub fn attunements(&self) -> [&Attunement; 4] {
        [
            &self.primary_attunement,
            &self.secondary_attunement,
            &self.tertiary_attunement,
            &self.quaternary_attunement,
        ]
    }
}

/// A miracle held by a wise character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Miracle {
    /// Entry identifier.
    pub id: Uuid,
    /// Miracle name or description.
    pub name: String,
    /// Currently active.
    pub is_active: bool,
}

impl Default for Miracle {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            is_active: false,
        }
    }
}

/// A miracle slot, which may instead hold a magic item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiracleSlot {
    /// Slot identifier.
    pub id: Uuid,
    /// Miracles in the slot.
    pub miracles: Vec<Miracle>,
    /// The slot is given over to a magic item.
    pub is_magic_item_slot: bool,
    /// Name of that magic item.
    pub magic_item_name: String,
}

impl Default for MiracleSlot {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            miracles: Vec::new(),
            is_magic_item_slot: false,
            magic_item_name: String::new(),
        }
    }
}

/// Loot taken in a conflict by a strong character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictLoot {
    /// What was taken.
    pub keyword: String,
    /// Loot category, lowercase.
    #[serde(rename = "type")]
    pub kind: String,
    /// Uses left before the loot is spent.
    pub uses_remaining: i64,
}

impl Default for ConflictLoot {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            kind: "object".to_string(),
            uses_remaining: 0,
        }
    }
}

/// Combat options for strong characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongCombatOptions {
    /// Chosen combat option per slot, `None` when the slot is empty.
    pub slots: Vec<Option<i64>>,
    /// Current conflict loot, if any.
    pub conflict_loot: Option<ConflictLoot>,
}

impl Default for StrongCombatOptions {
    fn default() -> Self {
        Self {
            slots: vec![None; FIXED_SLOT_COUNT],
            conflict_loot: None,
        }
    }
}

/// A quirk slot for brave characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuirkSlot {
    /// Slot identifier.
    pub id: Uuid,
    /// The chosen quirk.
    pub quirk: Option<String>,
    /// Ally protected by the quirk, where it names one.
    pub protected_ally_name: String,
}

impl Default for QuirkSlot {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            quirk: None,
            protected_ally_name: String::new(),
        }
    }
}

/// Options for brave characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BraveQuirkOptions {
    /// Exactly [`FIXED_SLOT_COUNT`] quirk slots.
    pub quirk_slots: Vec<QuirkSlot>,
    /// The "say no" power has been spent this session.
    pub has_used_say_no_power: bool,
}

impl Default for BraveQuirkOptions {
    fn default() -> Self {
        Self {
            quirk_slots: (0..FIXED_SLOT_COUNT).map(|_| QuirkSlot::default()).collect(),
            has_used_say_no_power: false,
        }
    }
}

/// A knack slot for clever characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnackSlot {
    /// Slot identifier.
    pub id: Uuid,
    /// The chosen knack.
    pub knack: Option<String>,
}

impl Default for KnackSlot {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            knack: None,
        }
    }
}

/// Options for clever characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleverKnackOptions {
    /// Exactly [`FIXED_SLOT_COUNT`] knack slots.
    pub knack_slots: Vec<KnackSlot>,
    /// The unorthodox-solution bonus has been spent.
    pub has_used_unorthodox_bonus: bool,
}

impl Default for CleverKnackOptions {
    fn default() -> Self {
        Self {
            knack_slots: (0..FIXED_SLOT_COUNT).map(|_| KnackSlot::default()).collect(),
            has_used_unorthodox_bonus: false,
        }
    }
}

/// The signature object of a fortunate character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureObject {
    /// Object name.
    pub name: String,
}

/// A retainer serving a fortunate character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retainer {
    /// Entry identifier.
    pub id: Uuid,
    /// Retainer name.
    pub name: String,
    /// Retainer class or trade.
    pub class: String,
    /// Hit dice in rulebook notation.
    pub hit_dice: String,
    /// Defense value.
    pub defense_value: i64,
    /// Movement rate.
    pub movement: i64,
    /// Descriptive keywords.
    pub keywords: Vec<String>,
    /// Free-text notes.
    pub notes: String,
}

impl Default for Retainer {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            class: String::new(),
            hit_dice: "1".to_string(),
            defense_value: 0,
            movement: super::DEFAULT_MOVEMENT,
            keywords: Vec::new(),
            notes: String::new(),
        }
    }
}

/// Options for fortunate characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortunateOptions {
    /// Social standing.
    pub standing: String,
    /// The once-per-session fortune has been used.
    pub has_used_fortune: bool,
    /// The character's signature object.
    pub signature_object: SignatureObject,
    /// Retainers in service.
    pub retainers: Vec<Retainer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_slot_blocks_default_to_ten() {
        assert_eq!(StrongCombatOptions::default().slots.len(), FIXED_SLOT_COUNT);
        assert_eq!(
            BraveQuirkOptions::default().quirk_slots.len(),
            FIXED_SLOT_COUNT
        );
        assert_eq!(
            CleverKnackOptions::default().knack_slots.len(),
            FIXED_SLOT_COUNT
        );
    }

    #[test]
    fn attunement_type_serializes_lowercase() {
        let json = serde_json::to_string(&AttunementType::Organism).unwrap();
        assert_eq!(json, "\"organism\"");
        assert_eq!(AttunementType::from_tag("SPELL"), Some(AttunementType::Spell));
    }

    #[test]
    fn conflict_loot_absent_serializes_null() {
        let json = serde_json::to_value(StrongCombatOptions::default()).unwrap();
        assert!(json["conflictLoot"].is_null());
        assert_eq!(json["slots"].as_array().map(Vec::len), Some(10));
    }

    #[test]
    fn attunement_slot_has_four_defaults() {
        let slot = AttunementSlot::default();
        for att in slot.attunements() {
            assert_eq!(att.kind, AttunementType::Item);
            assert!(!att.is_active);
            assert!(!att.is_lost);
        }
    }
}
