//! Key-value persistence.
//!
//! The character list is kept as one JSON string under [`CHARACTERS_KEY`],
//! the same way a platform preference store would hold it. No schema
//! version is stored; loading runs the normalizer, so older blobs still
//! read back.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// Key under which the character list is stored.
pub const CHARACTERS_KEY: &str = "characters";

/// A string-keyed store of string values.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

/// An in-process store, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// A store backed by one JSON file mapping keys to string values.
///
/// The file is read on every access and rewritten whole on every change,
/// through a temporary file that is renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store at `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                CoreError::Storage(format!("{} is not a valid store: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> CoreResult<()> {
        let text = serde_json::to_string_pretty(values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = values.len(), "wrote store");
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}
