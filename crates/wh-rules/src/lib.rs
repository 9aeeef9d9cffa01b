//! Whitehack game rules.
//!
//! Provides the six character classes and the static advancement table
//! that maps a class and level to hit dice, attack value, saving value,
//! slots, groups and raises, along with the experience thresholds that
//! drive levelling.

pub mod advancement;
pub mod class;

pub use advancement::{
    AdvancementRow, AdvancementTable, LevelStats, MAX_LEVEL, MIN_LEVEL, level_for_xp,
    stats_for_level, xp_requirement,
};
pub use class::{CharacterClass, ParseClassError};
