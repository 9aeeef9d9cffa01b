use colored::Colorize;
use wh_core::character::StrongCombatOptions;
use wh_core::{Character, CharacterClass};

use crate::config::CliConfig;

pub fn run(config: &CliConfig, query: &str) -> Result<(), String> {
    let roster = super::load_roster(config)?;
    let c = roster
        .resolve(query)
        .ok_or_else(|| format!("character not found: \"{query}\""))?;

    print_header(c);
    print_attributes(c);
    print_combat(c);
    print_groups(c);
    print_equipment(c);
    print_class_options(c);

    if !c.notes.is_empty() {
        println!("  {}", "notes".dimmed());
        for line in c.notes.lines() {
            println!("    {}", line.trim());
        }
        println!();
    }

    Ok(())
}

fn print_header(c: &Character) {
    let name = if c.name.is_empty() { "(unnamed)" } else { c.name.as_str() };
    println!(
        "  {} [{} {}] {}",
        name.bold(),
        c.character_class,
        c.level,
        c.id.full().dimmed()
    );
    if !c.player_name.is_empty() {
        println!("  player:     {}", c.player_name);
    }
    let next = match c.next_level_xp() {
        Some(xp) => format!(" / next level at {xp}"),
        None => String::new(),
    };
    println!("  xp:         {}{next}", c.experience);
    if c.level_from_experience() > c.level {
        println!("  {}", "ready to level up".green());
    }
    println!();
}

fn print_attributes(c: &Character) {
    println!("  {}", "attributes".dimmed());
    if c.use_custom_attributes {
        for attr in &c.custom_attributes {
            println!("    {:<13} {}", attr.name, attr.value);
        }
    } else {
        for (name, score) in c.standard_attributes() {
            println!("    {name:<13} {score}");
        }
    }
    println!();
}

fn print_combat(c: &Character) {
    let stats = c.stats();
    println!("  {}", "combat".dimmed());
    println!("    hp          {}/{}", c.current_hp, c.max_hp);
    println!("    hit dice    {}", stats.hit_dice);
    println!("    attack      {}", c.attack_value());
    println!("    defense     {}", c.defense_value);
    println!("    saving      {}", c.saving_value());
    println!("    movement    {}", c.movement);
    println!("    slots       {}", stats.slots);
    println!();
}

fn print_groups(c: &Character) {
    let mut lines = Vec::new();
    if !c.species_group.is_empty() {
        lines.push(format!("species     {}", c.species_group));
    }
    if !c.vocation_group.is_empty() {
        lines.push(format!("vocation    {}", c.vocation_group));
    }
    if !c.affiliation_groups.is_empty() {
        lines.push(format!("affiliation {}", c.affiliation_groups.join(", ")));
    }
    if !c.languages.is_empty() {
        lines.push(format!("languages   {}", c.languages.join(", ")));
    }
    if lines.is_empty() {
        return;
    }
    println!("  {}", "groups".dimmed());
    for line in lines {
        println!("    {line}");
    }
    println!();
}

fn print_equipment(c: &Character) {
    println!("  {}", "equipment".dimmed());
    for w in &c.weapons {
        println!("    {} ({}, {}) x{}", w.name, w.damage, w.weight.tag(), w.quantity);
    }
    for a in &c.armor {
        let kind = if a.is_shield { "shield" } else { "armor" };
        println!("    {} ({kind}, DF {})", a.name, a.defense_value);
    }
    for g in &c.gear {
        println!("    {} ({}) x{}", g.name, g.weight.tag(), g.quantity);
    }
    println!(
        "    carried {} / {}, coins {} (+{} stashed)",
        c.carried_weight(),
        c.max_encumbrance,
        c.coins,
        c.stashed_coins
    );
    println!();
}

fn print_class_options(c: &Character) {
    match c.character_class {
        CharacterClass::Deft => {
            let names: Vec<String> = c
                .attunement_slots
                .iter()
                .flat_map(|slot| slot.attunements())
                .filter(|a| !a.name.is_empty())
                .map(|a| format!("{} ({})", a.name, a.kind.tag()))
                .collect();
            print_option_list("attunements", &names);
        }
        CharacterClass::Wise => {
            let names: Vec<String> = c
                .miracle_slots
                .iter()
                .flat_map(|slot| &slot.miracles)
                .filter(|m| !m.name.is_empty())
                .map(|m| m.name.clone())
                .collect();
            print_option_list("miracles", &names);
        }
        CharacterClass::Strong => {
            print_option_list("combat options", &combat_options(&c.strong_combat_options));
        }
        CharacterClass::Brave => {
            let quirks: Vec<String> = c
                .brave_quirk_options
                .quirk_slots
                .iter()
                .filter_map(|q| q.quirk.clone())
                .collect();
            print_option_list("quirks", &quirks);
            println!("    comeback dice {}", c.comeback_dice);
        }
        CharacterClass::Clever => {
            let knacks: Vec<String> = c
                .clever_knack_options
                .knack_slots
                .iter()
                .filter_map(|k| k.knack.clone())
                .collect();
            print_option_list("knacks", &knacks);
        }
        CharacterClass::Fortunate => {
            let f = &c.fortunate_options;
            let mut lines = Vec::new();
            if !f.standing.is_empty() {
                lines.push(format!("standing: {}", f.standing));
            }
            if !f.signature_object.name.is_empty() {
                lines.push(format!("signature: {}", f.signature_object.name));
            }
            lines.extend(f.retainers.iter().map(|r| format!("retainer: {}", r.name)));
            print_option_list("fortune", &lines);
        }
    }
}

fn combat_options(options: &StrongCombatOptions) -> Vec<String> {
    options
        .slots
        .iter()
        .flatten()
        .map(|option| format!("option #{option}"))
        .collect()
}

fn print_option_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {}", title.dimmed());
    for item in items {
        println!("    {item}");
    }
    println!();
}
