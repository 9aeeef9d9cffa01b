use std::path::Path;

use crate::config::CliConfig;

pub fn run(config: &CliConfig, output: Option<&Path>) -> Result<(), String> {
    let roster = super::load_roster(config)?;
    let content = roster
        .export_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported {} character(s) to {}", roster.len(), path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
