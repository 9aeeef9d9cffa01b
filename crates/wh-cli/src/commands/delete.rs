use crate::config::CliConfig;

pub fn run(config: &CliConfig, query: &str) -> Result<(), String> {
    let mut roster = super::load_roster(config)?;
    let id = roster
        .resolve(query)
        .map(|c| c.id)
        .ok_or_else(|| format!("character not found: \"{query}\""))?;
    let removed = roster.remove(id).map_err(|e| e.to_string())?;
    super::save_roster(config, &roster)?;

    println!("  Deleted {} ({id})", removed.name);
    Ok(())
}
