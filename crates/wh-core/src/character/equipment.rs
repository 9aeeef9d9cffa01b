//! Weapons, armor and gear.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much an item counts toward encumbrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Does not count at all (rings, coins in a purse).
    #[serde(rename = "no size")]
    NoSize,
    /// Counts as half a regular item.
    Minor,
    /// One encumbrance slot.
    #[default]
    Regular,
    /// Two encumbrance slots.
    Heavy,
}

impl Weight {
    /// Every weight class.
    pub const ALL: [Weight; 4] = [Self::NoSize, Self::Minor, Self::Regular, Self::Heavy];

    /// The tag used in serialized data.
    pub fn tag(self) -> &'static str {
        match self {
            Self::NoSize => "no size",
            Self::Minor => "minor",
            Self::Regular => "regular",
            Self::Heavy => "heavy",
        }
    }

    /// Parse a weight tag in any letter casing.
    pub fn from_tag(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|w| w.tag() == lower)
    }

    /// Encumbrance in half-slots.
    pub fn half_slots(self) -> i64 {
        match self {
            Self::NoSize => 0,
            Self::Minor => 1,
            Self::Regular => 2,
            Self::Heavy => 4,
        }
    }
}

/// A weapon carried by a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Entry identifier.
    pub id: Uuid,
    /// Weapon name.
    pub name: String,
    /// Damage notation, e.g. `1d6+1`.
    pub damage: String,
    /// Encumbrance class.
    pub weight: Weight,
    /// Range description for missile weapons.
    pub range: String,
    /// Rate of fire for missile weapons.
    pub rate_of_fire: String,
    /// Special properties.
    pub special: String,
    /// How many are carried.
    pub quantity: i64,
    /// Magical or situational bonus.
    pub bonus: i64,
    /// Currently wielded.
    pub is_equipped: bool,
    /// Left in the stash rather than carried.
    pub is_stashed: bool,
    /// Magical.
    pub is_magical: bool,
    /// Cursed.
    pub is_cursed: bool,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            damage: "1d6".to_string(),
            weight: Weight::Regular,
            range: String::new(),
            rate_of_fire: String::new(),
            special: String::new(),
            quantity: 1,
            bonus: 0,
            is_equipped: false,
            is_stashed: false,
            is_magical: false,
            is_cursed: false,
        }
    }
}

/// A piece of armor or a shield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    /// Entry identifier.
    pub id: Uuid,
    /// Armor name.
    pub name: String,
    /// Defense value granted when worn.
    pub defense_value: i64,
    /// Encumbrance class.
    pub weight: Weight,
    /// This piece is a shield.
    pub is_shield: bool,
    /// Magical or situational bonus.
    pub bonus: i64,
    /// Currently worn.
    pub is_equipped: bool,
    /// Left in the stash rather than carried.
    pub is_stashed: bool,
    /// Magical.
    pub is_magical: bool,
    /// Cursed.
    pub is_cursed: bool,
}

impl Default for Armor {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            defense_value: 0,
            weight: Weight::Regular,
            is_shield: false,
            bonus: 0,
            is_equipped: false,
            is_stashed: false,
            is_magical: false,
            is_cursed: false,
        }
    }
}

/// A general equipment item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gear {
    /// Entry identifier.
    pub id: Uuid,
    /// Item name.
    pub name: String,
    /// Encumbrance class.
    pub weight: Weight,
    /// How many are carried.
    pub quantity: i64,
    /// Holds other items (backpack, sack).
    pub is_container: bool,
    /// Magical or situational bonus.
    pub bonus: i64,
    /// Currently in hand or worn.
    pub is_equipped: bool,
    /// Left in the stash rather than carried.
    pub is_stashed: bool,
    /// Magical.
    pub is_magical: bool,
    /// Cursed.
    pub is_cursed: bool,
}

impl Default for Gear {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            weight: Weight::Minor,
            quantity: 1,
            is_container: false,
            bonus: 0,
            is_equipped: false,
            is_stashed: false,
            is_magical: false,
            is_cursed: false,
        }
    }
}
