//! Core types for Whitehack character sheets.
//!
//! Character data arrives as loosely-shaped JSON from more than one
//! producer. It goes through a two-stage pipeline: [`normalize`] rewrites
//! the untyped tree into the canonical schema, then serde decodes that
//! tree into a typed [`Character`]. The [`Roster`] owns the decoded list
//! and persists it through a [`PreferenceStore`].

// The canonical character object is built with one large `json!` literal.
#![recursion_limit = "256"]

/// The typed character entity and its sub-structures.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Reconciliation of dialect JSON into the canonical schema.
pub mod normalize;
/// The single-writer in-memory character list.
pub mod roster;
/// Key-value persistence for the character list.
pub mod store;
/// Import and export of character JSON.
pub mod transfer;

/// Re-export the character entity types.
pub use character::{Character, CharacterId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the normalizer entry points.
pub use normalize::{Dialect, normalize, normalize_character};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export persistence types.
pub use store::{CHARACTERS_KEY, FileStore, MemoryStore, PreferenceStore};
/// Re-export import and export helpers.
pub use transfer::{export_characters, parse_import};
/// Re-export the rules crate's class enum, which the schema is keyed on.
pub use wh_rules::CharacterClass;
