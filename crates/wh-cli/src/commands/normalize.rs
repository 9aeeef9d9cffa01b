use serde_json::Value;
use wh_core::{Dialect, normalize};

pub fn run(source: &str) -> Result<(), String> {
    let text = super::read_source(source)?;
    let value: Value =
        serde_json::from_str(&text).map_err(|e| format!("invalid format: not valid JSON: {e}"))?;

    let is_character_data = value.is_object()
        || value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_object));
    if !is_character_data {
        return Err(
            "invalid format: expected a character object or an array of character objects".into(),
        );
    }

    eprintln!("  dialect: {}", Dialect::detect(&value));
    let canonical = serde_json::to_string_pretty(&normalize(&value))
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{canonical}");
    Ok(())
}
