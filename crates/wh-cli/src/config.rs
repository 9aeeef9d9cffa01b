//! Settings shared by every command.

use std::path::PathBuf;

use wh_core::{CHARACTERS_KEY, FileStore};

/// Default location of the character store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "whitehack.json";

/// Where characters are kept and how loudly to log.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the JSON preference file.
    pub store_path: PathBuf,
    /// Key the character list is stored under.
    pub key: String,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            key: CHARACTERS_KEY.to_string(),
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Set the store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the storage key; a blank key keeps the default.
    pub fn with_key(mut self, key: &str) -> Self {
        let key = key.trim();
        if !key.is_empty() {
            self.key = key.to_string();
        }
        self
    }

    /// Set verbose logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Open the configured store.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.store_path)
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
