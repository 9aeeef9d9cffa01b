use comfy_table::{ContentArrangement, Table};
use wh_rules::{AdvancementTable, MAX_LEVEL, MIN_LEVEL};

/// Print the advancement table for a class, or one row of it.
pub fn run_table(class: &str, level: Option<i64>) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let table = AdvancementTable::whitehack();

    let levels: Vec<i64> = match level {
        Some(level) => vec![level],
        None => (MIN_LEVEL..=MAX_LEVEL).map(i64::from).collect(),
    };

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Level", "XP", "HD", "AV", "SV", "Slots", "Groups", "Raises"]);
    for level in levels {
        let level = level.clamp(i64::from(MIN_LEVEL), i64::from(MAX_LEVEL));
        let stats = table.stats_for_level(class, level);
        let xp = if level <= i64::from(MIN_LEVEL) {
            0
        } else {
            table.xp_requirement(class, level)
        };
        out.add_row(vec![
            level.to_string(),
            xp.to_string(),
            stats.hit_dice.to_string(),
            stats.attack_value.to_string(),
            stats.saving_value.to_string(),
            stats.slots.to_string(),
            stats.groups.to_string(),
            stats.raises.to_string(),
        ]);
    }

    println!("  {class}");
    println!("{out}");
    Ok(())
}

/// Print the level a class reaches with `xp` experience.
pub fn run_level(class: &str, xp: i64) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let level = AdvancementTable::whitehack().level_for_xp(class, xp);
    println!("  {class} with {xp} XP: level {level}");
    Ok(())
}

/// Print the experience a class needs to reach `level`.
pub fn run_xp(class: &str, level: i64) -> Result<(), String> {
    let class = super::parse_class(class)?;
    let xp = AdvancementTable::whitehack().xp_requirement(class, level);
    println!("  {class} level {level}: {xp} XP");
    Ok(())
}
