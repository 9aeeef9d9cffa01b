pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod new;
pub mod normalize;
pub mod show;
pub mod stats;

use std::io::Read;

use tracing::debug;
use wh_core::{CharacterClass, Roster};

use crate::config::CliConfig;

/// Load the roster from the configured store.
fn load_roster(config: &CliConfig) -> Result<Roster, String> {
    debug!(store = %config.store_path.display(), key = %config.key, "loading roster");
    Roster::load_settled(&mut config.store(), &config.key)
        .map_err(|e| format!("cannot load {}: {e}", config.store_path.display()))
}

/// Write the roster back to the configured store.
fn save_roster(config: &CliConfig, roster: &Roster) -> Result<(), String> {
    roster
        .save_to(&mut config.store(), &config.key)
        .map_err(|e| format!("cannot save {}: {e}", config.store_path.display()))
}

fn parse_class(name: &str) -> Result<CharacterClass, String> {
    name.parse::<CharacterClass>().map_err(|e| e.to_string())
}

/// Read a file, or stdin when `source` is `-`.
fn read_source(source: &str) -> Result<String, String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).map_err(|e| format!("cannot read {source}: {e}"))
    }
}
