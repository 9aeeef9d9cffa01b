use crate::character::CharacterId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when importing, storing or editing characters.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The import payload is not JSON, or not a character object or array of them.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Character data could not be decoded after normalization, or encoded for export.
    #[error("invalid character data: {0}")]
    Json(#[from] serde_json::Error),

    /// No character with this ID is in the roster.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// A positional delete referred past the end of the roster.
    #[error("no character at index {0}")]
    IndexOutOfRange(usize),

    /// A character with this ID is already in the roster.
    #[error("character already exists: {0}")]
    DuplicateId(CharacterId),

    /// The preference store holds data it cannot read back.
    #[error("storage error: {0}")]
    Storage(String),

    /// Reading or writing the preference store failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
