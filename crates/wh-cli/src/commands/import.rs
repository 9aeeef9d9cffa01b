use crate::config::CliConfig;

pub fn run(config: &CliConfig, source: &str) -> Result<(), String> {
    let text = super::read_source(source)?;
    let mut roster = super::load_roster(config)?;
    let ids = roster
        .import_json(&text)
        .map_err(|e| format!("import failed: {e}"))?;
    super::save_roster(config, &roster)?;

    for id in &ids {
        if let Some(c) = roster.get(*id) {
            println!("  + {} ({id})", c.name);
        }
    }
    println!("  Imported {} character(s)", ids.len());
    Ok(())
}
