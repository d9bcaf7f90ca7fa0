use agenda_core::expand_occurrences;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(id: u32, json: bool) -> Result<()> {
    let path = super::data_path()?;
    let store = super::load_store(&path)?;

    let Some(event) = store.find_by_id(id) else {
        println!("{}", format!("No event with id {}", id).dimmed());
        return Ok(());
    };
    if !event.is_recurring() {
        println!("{}", format!("Event {} does not repeat", id).dimmed());
        return Ok(());
    }

    let occurrences = expand_occurrences(event);

    if json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    if occurrences.is_empty() {
        println!("{}", "No occurrences".dimmed());
        return Ok(());
    }

    for occurrence in &occurrences {
        println!("{}", occurrence.render());
    }

    Ok(())
}
