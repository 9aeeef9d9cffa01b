use serde_json::Value;
use tracing::info;

use crate::character::{Character, CharacterId};
use crate::error::{CoreError, CoreResult};
use crate::store::{CHARACTERS_KEY, PreferenceStore};
use crate::transfer::{decode_characters, export_characters, parse_import, parse_json};

/// The ordered list of characters, and the only writer to it.
///
/// Views read through [`Roster::characters`]; every change goes through
/// one of the mutating methods, which keep IDs unique.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// A roster over existing characters. Fails if two share an ID.
    pub fn from_characters(characters: Vec<Character>) -> CoreResult<Self> {
        let mut roster = Self::new();
        for character in characters {
            roster.add(character)?;
        }
        Ok(roster)
    }

    /// All characters in order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    /// Look up a character by ID.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Find a character by name (case-insensitive). The first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        let lower = name.to_lowercase();
        self.characters
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Resolve user input to a character: a full ID, a unique ID prefix,
    /// or a name.
    pub fn resolve(&self, query: &str) -> Option<&Character> {
        if let Ok(id) = query.parse::<CharacterId>() {
            return self.get(id);
        }
        let prefix = query.trim().to_lowercase();
        if prefix.len() >= 4 {
            let mut matches = self
                .characters
                .iter()
                .filter(|c| c.id.full().starts_with(&prefix));
            if let (Some(only), None) = (matches.next(), matches.next()) {
                return Some(only);
            }
        }
        self.find_by_name(query)
    }

    /// Append a new character. Fails if its ID is already taken.
    pub fn add(&mut self, character: Character) -> CoreResult<CharacterId> {
        if self.position(character.id).is_some() {
            return Err(CoreError::DuplicateId(character.id));
        }
        let id = character.id;
        self.characters.push(character);
        Ok(id)
    }

    /// Replace the character with the same ID, returning the old version.
    pub fn replace(&mut self, character: Character) -> CoreResult<Character> {
        let index = self
            .position(character.id)
            .ok_or(CoreError::CharacterNotFound(character.id))?;
        Ok(std::mem::replace(&mut self.characters[index], character))
    }

    /// Remove a character by ID.
    pub fn remove(&mut self, id: CharacterId) -> CoreResult<Character> {
        let index = self
            .position(id)
            .ok_or(CoreError::CharacterNotFound(id))?;
        Ok(self.characters.remove(index))
    }

    /// Remove the character at a list position.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<Character> {
        if index >= self.characters.len() {
            return Err(CoreError::IndexOutOfRange(index));
        }
        Ok(self.characters.remove(index))
    }

    /// Import characters from JSON text and append them.
    ///
    /// Every imported record is given a fresh ID, so re-importing an
    /// export never collides with the originals. Nothing is added unless
    /// the whole payload parses.
    pub fn import_json(&mut self, text: &str) -> CoreResult<Vec<CharacterId>> {
        let imported: Vec<Character> = parse_import(text)?
            .iter()
            .map(Character::with_new_identity)
            .collect();
        let ids: Vec<CharacterId> = imported.iter().map(|c| c.id).collect();
        self.characters.extend(imported);
        info!(count = ids.len(), total = self.len(), "imported characters");
        Ok(ids)
    }

    /// Export the whole roster as a canonical JSON array.
    pub fn export_json(&self) -> CoreResult<String> {
        export_characters(&self.characters)
    }

    /// Load the roster stored under [`CHARACTERS_KEY`].
    pub fn load(store: &dyn PreferenceStore) -> CoreResult<Self> {
        Self::load_from(store, CHARACTERS_KEY)
    }

    /// Load the roster stored under `key`; a missing key gives an empty roster.
    pub fn load_from(store: &dyn PreferenceStore, key: &str) -> CoreResult<Self> {
        let Some(text) = store.get(key)? else {
            return Ok(Self::new());
        };
        let roster = Self::from_characters(parse_import(&text)?)?;
        info!(count = roster.len(), key, "loaded roster");
        Ok(roster)
    }

    /// Load the roster stored under `key` and pin down any minted IDs.
    ///
    /// Records stored without a usable ID get a fresh one on every load.
    /// When that happens the roster is written back once, so the IDs seen
    /// by one command are still valid in the next.
    pub fn load_settled(store: &mut dyn PreferenceStore, key: &str) -> CoreResult<Self> {
        let Some(text) = store.get(key)? else {
            return Ok(Self::new());
        };
        let value = parse_json(&text)?;
        let roster = Self::from_characters(decode_characters(&value)?)?;
        if has_unstable_ids(&value) {
            roster.save_to(store, key)?;
            info!(count = roster.len(), key, "stored minted character ids");
        }
        Ok(roster)
    }

    /// Save the roster under [`CHARACTERS_KEY`].
    pub fn save(&self, store: &mut dyn PreferenceStore) -> CoreResult<()> {
        self.save_to(store, CHARACTERS_KEY)
    }

    /// Save the roster under `key`.
    pub fn save_to(&self, store: &mut dyn PreferenceStore, key: &str) -> CoreResult<()> {
        let text = serde_json::to_string(&self.characters)?;
        store.set(key, &text)?;
        info!(count = self.len(), key, "saved roster");
        Ok(())
    }
}

/// Whether any stored record lacks an ID the normalizer would keep.
fn has_unstable_ids(value: &Value) -> bool {
    let records: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    records.into_iter().any(|record| {
        record
            .get("id")
            .and_then(Value::as_str)
            .is_none_or(|id| id.parse::<CharacterId>().is_err())
    })
}
