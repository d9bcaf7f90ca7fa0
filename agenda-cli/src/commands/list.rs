use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(json: bool) -> Result<()> {
    let path = super::data_path()?;
    let store = super::load_store(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.all())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("{}", "No events yet".dimmed());
        return Ok(());
    }

    for event in store.all() {
        println!("{}", event.render());
    }

    Ok(())
}
