//! The six Whitehack character classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Whitehack character class.
///
/// Serialized as a lowercase tag (`"deft"`, `"strong"`, ...). Parsing
/// from text ignores letter casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    /// Specialists and tricksters; attune to items, words and places.
    #[default]
    Deft,
    /// Fighters; pick combat options and may take conflict loot.
    Strong,
    /// Miracle workers; hold miracles in slots.
    Wise,
    /// Underdogs with quirks and comeback dice.
    Brave,
    /// Knack users with an unorthodox bonus.
    Clever,
    /// Favored by fate; have standing, a signature object and retainers.
    Fortunate,
}

impl CharacterClass {
    /// Every class, in rulebook order.
    pub const ALL: [CharacterClass; 6] = [
        Self::Deft,
        Self::Strong,
        Self::Wise,
        Self::Brave,
        Self::Clever,
        Self::Fortunate,
    ];

    /// The lowercase tag used in serialized character data.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Deft => "deft",
            Self::Strong => "strong",
            Self::Wise => "wise",
            Self::Brave => "brave",
            Self::Clever => "clever",
            Self::Fortunate => "fortunate",
        }
    }

    /// Parse a class from its name in any letter casing.
    pub fn from_tag(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.tag() == lower)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Deft => "Deft",
            Self::Strong => "Strong",
            Self::Wise => "Wise",
            Self::Brave => "Brave",
            Self::Clever => "Clever",
            Self::Fortunate => "Fortunate",
        };
        f.write_str(name)
    }
}

/// Returned when text does not name a known class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown class \"{0}\" (expected deft, strong, wise, brave, clever or fortunate)")]
pub struct ParseClassError(pub String);

impl FromStr for CharacterClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseClassError(s.to_string()))
    }
}
