use wh_core::Character;

use crate::config::CliConfig;

pub fn run(
    config: &CliConfig,
    name: &str,
    class: &str,
    player: Option<&str>,
) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name must not be empty".into());
    }
    let class = super::parse_class(class)?;

    let mut roster = super::load_roster(config)?;
    let mut character = Character::new(name, class);
    if let Some(player) = player {
        character.player_name = player.to_string();
    }
    let id = roster.add(character).map_err(|e| e.to_string())?;
    super::save_roster(config, &roster)?;

    println!("  Created {name} the {class} ({id})");
    Ok(())
}
