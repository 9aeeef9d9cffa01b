use comfy_table::{ContentArrangement, Table};

use crate::config::CliConfig;

pub fn run(config: &CliConfig) -> Result<(), String> {
    let roster = super::load_roster(config)?;

    if roster.is_empty() {
        println!("  No characters in {}", config.store_path.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Class", "Level", "HP", "Species", "Vocation"]);

    for c in roster.characters() {
        table.add_row(vec![
            c.id.to_string(),
            c.name.clone(),
            c.character_class.to_string(),
            c.level.to_string(),
            format!("{}/{}", c.current_hp, c.max_hp),
            c.species_group.clone(),
            c.vocation_group.clone(),
        ]);
    }

    println!("{table}");
    println!("\n  {} character(s)", roster.len());

    Ok(())
}
