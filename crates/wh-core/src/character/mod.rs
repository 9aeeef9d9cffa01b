//! The canonical character record.
//!
//! Field names and defaults here are the canonical schema: the normalizer
//! always emits exactly this shape, and export writes it back out.

pub mod equipment;
pub mod options;

pub use equipment::{Armor, Gear, Weapon, Weight};
pub use options::{
    Attunement, AttunementSlot, AttunementType, BraveQuirkOptions, CleverKnackOptions,
    ConflictLoot, FortunateOptions, KnackSlot, Miracle, MiracleSlot, QuirkSlot, Retainer,
    SignatureObject, StrongCombatOptions,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wh_rules::{AdvancementTable, CharacterClass, LevelStats, MAX_LEVEL, MIN_LEVEL};

/// Lowest standard attribute score.
pub const MIN_ATTRIBUTE: u8 = 3;
/// Highest standard attribute score.
pub const MAX_ATTRIBUTE: u8 = 18;
/// Score given to an attribute that was never set.
pub const DEFAULT_ATTRIBUTE: u8 = 10;
/// Hit points of a fresh character.
pub const DEFAULT_HP: i64 = 1;
/// Stored attack value when none was entered.
pub const DEFAULT_ATTACK_VALUE: i64 = 10;
/// Movement rate when none was entered.
pub const DEFAULT_MOVEMENT: i64 = 30;
/// Encumbrance limit when none was entered.
pub const DEFAULT_MAX_ENCUMBRANCE: i64 = 15;
/// Length of the quirk, knack and combat-option slot lists.
pub const FIXED_SLOT_COUNT: usize = 10;

/// Unique identifier of a character within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The full hyphenated form, as stored.
    pub fn full(&self) -> String {
        self.0.to_string()
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl FromStr for CharacterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A user-defined attribute, used instead of the standard six.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttribute {
    /// Entry identifier.
    pub id: Uuid,
    /// Attribute name.
    pub name: String,
    /// Attribute score.
    pub value: i64,
}

impl Default for CustomAttribute {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            value: i64::from(DEFAULT_ATTRIBUTE),
        }
    }
}

/// An attribute linked to a group, granting its bonus on related rolls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroupPair {
    /// Entry identifier.
    pub id: Uuid,
    /// Attribute name.
    pub attribute: String,
    /// Group name.
    pub group: String,
}

impl Default for AttributeGroupPair {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            attribute: String::new(),
            group: String::new(),
        }
    }
}

/// A Whitehack character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique identifier; never changes once assigned.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Name of the player.
    pub player_name: String,
    /// Character class.
    pub character_class: CharacterClass,
    /// Level, 1..=10.
    pub level: u8,

    /// Strength score.
    pub strength: u8,
    /// Agility score.
    pub agility: u8,
    /// Toughness score.
    pub toughness: u8,
    /// Intelligence score.
    pub intelligence: u8,
    /// Willpower score.
    pub willpower: u8,
    /// Charisma score.
    pub charisma: u8,
    /// Use `custom_attributes` instead of the standard six.
    pub use_custom_attributes: bool,
    /// Custom attributes, meaningful when `use_custom_attributes` is set.
    pub custom_attributes: Vec<CustomAttribute>,

    /// Current hit points.
    #[serde(rename = "currentHP")]
    pub current_hp: i64,
    /// Maximum hit points.
    #[serde(rename = "maxHP")]
    pub max_hp: i64,
    /// Stored attack value; the table value applies while this is the default.
    #[serde(rename = "_attackValue")]
    pub stored_attack_value: i64,
    /// Defense value.
    pub defense_value: i64,
    /// Movement rate.
    pub movement: i64,

    /// Species group.
    pub species_group: String,
    /// Vocation group.
    pub vocation_group: String,
    /// Affiliation groups.
    pub affiliation_groups: Vec<String>,
    /// Attribute to group links.
    pub attribute_group_pairs: Vec<AttributeGroupPair>,

    /// Coins carried.
    pub coins: i64,
    /// Coins left in the stash.
    pub stashed_coins: i64,
    /// Experience points.
    pub experience: i64,
    /// Corruption.
    pub corruption: i64,
    /// Comeback dice.
    pub comeback_dice: i64,
    /// The say-no option has been used.
    pub has_used_say_no: bool,

    /// Weapons.
    pub weapons: Vec<Weapon>,
    /// Armor and shields.
    pub armor: Vec<Armor>,
    /// Other equipment.
    pub gear: Vec<Gear>,
    /// Loose inventory lines.
    pub inventory: Vec<String>,
    /// Current encumbrance as entered.
    pub current_encumbrance: i64,
    /// Encumbrance limit.
    pub max_encumbrance: i64,
    /// Free-text notes.
    pub notes: String,
    /// Languages spoken.
    pub languages: Vec<String>,

    /// Attunement slots.
    pub attunement_slots: Vec<AttunementSlot>,
    /// Miracle slots.
    pub miracle_slots: Vec<MiracleSlot>,
    /// Strong class options.
    pub strong_combat_options: StrongCombatOptions,
    /// Brave class options.
    pub brave_quirk_options: BraveQuirkOptions,
    /// Clever class options.
    pub clever_knack_options: CleverKnackOptions,
    /// Fortunate class options.
    pub fortunate_options: FortunateOptions,
}

impl Character {
    /// A fresh level-1 character with every field at its default.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            player_name: String::new(),
            character_class: class,
            level: MIN_LEVEL,
            strength: DEFAULT_ATTRIBUTE,
            agility: DEFAULT_ATTRIBUTE,
            toughness: DEFAULT_ATTRIBUTE,
            intelligence: DEFAULT_ATTRIBUTE,
            willpower: DEFAULT_ATTRIBUTE,
            charisma: DEFAULT_ATTRIBUTE,
            use_custom_attributes: false,
            custom_attributes: Vec::new(),
            current_hp: DEFAULT_HP,
            max_hp: DEFAULT_HP,
            stored_attack_value: DEFAULT_ATTACK_VALUE,
            defense_value: 0,
            movement: DEFAULT_MOVEMENT,
            species_group: String::new(),
            vocation_group: String::new(),
            affiliation_groups: Vec::new(),
            attribute_group_pairs: Vec::new(),
            coins: 0,
            stashed_coins: 0,
            experience: 0,
            corruption: 0,
            comeback_dice: 0,
            has_used_say_no: false,
            weapons: Vec::new(),
            armor: Vec::new(),
            gear: Vec::new(),
            inventory: Vec::new(),
            current_encumbrance: 0,
            max_encumbrance: DEFAULT_MAX_ENCUMBRANCE,
            notes: String::new(),
            languages: Vec::new(),
            attunement_slots: vec![AttunementSlot::default()],
            miracle_slots: vec![MiracleSlot::default()],
            strong_combat_options: StrongCombatOptions::default(),
            brave_quirk_options: BraveQuirkOptions::default(),
            clever_knack_options: CleverKnackOptions::default(),
            fortunate_options: FortunateOptions::default(),
        }
    }

    /// A copy of this character under a freshly generated ID.
    pub fn with_new_identity(&self) -> Self {
        Self {
            id: CharacterId::new(),
            ..self.clone()
        }
    }

    /// Advancement-table statistics for the current class and level.
    pub fn stats(&self) -> LevelStats {
        AdvancementTable::whitehack().stats_for_level(self.character_class, i64::from(self.level))
    }

    /// Attack value: the stored value if one was entered, else the table's.
    pub fn attack_value(&self) -> i64 {
        if self.stored_attack_value == DEFAULT_ATTACK_VALUE {
            i64::from(self.stats().attack_value)
        } else {
            self.stored_attack_value
        }
    }

    /// Saving throw value from the table.
    pub fn saving_value(&self) -> u8 {
        self.stats().saving_value
    }

    /// Experience needed for the next level, or `None` at the top level.
    pub fn next_level_xp(&self) -> Option<u32> {
        (self.level < MAX_LEVEL).then(|| {
            AdvancementTable::whitehack()
                .xp_requirement(self.character_class, i64::from(self.level) + 1)
        })
    }

    /// The level the character's experience qualifies for.
    pub fn level_from_experience(&self) -> u8 {
        AdvancementTable::whitehack().level_for_xp(self.character_class, self.experience)
    }

    /// Encumbrance of everything carried (not stashed), rounded down.
    ///
    /// Minor items count half, heavy items double, and weapons and gear
    /// count once per unit of quantity. Saturates instead of overflowing.
    pub fn carried_weight(&self) -> i64 {
        let weapons = self
            .weapons
            .iter()
            .filter(|w| !w.is_stashed)
            .map(|w| w.weight.half_slots().saturating_mul(w.quantity.max(0)));
        let armor = self
            .armor
            .iter()
            .filter(|a| !a.is_stashed)
            .map(|a| a.weight.half_slots());
        let gear = self
            .gear
            .iter()
            .filter(|g| !g.is_stashed)
            .map(|g| g.weight.half_slots().saturating_mul(g.quantity.max(0)));
        weapons
            .chain(armor)
            .chain(gear)
            .fold(0_i64, i64::saturating_add)
            / 2
    }

    /// The standard six attributes as `(name, score)` pairs.
    pub fn standard_attributes(&self) -> [(&'static str, u8); 6] {
        [
            ("Strength", self.strength),
            ("Agility", self.agility),
            ("Toughness", self.toughness),
            ("Intelligence", self.intelligence),
            ("Willpower", self.willpower),
            ("Charisma", self.charisma),
        ]
    }
}
