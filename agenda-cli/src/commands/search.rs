use agenda_core::Event;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

/// Case-insensitive substring match over titles and descriptions.
pub fn run(query: &str) -> Result<()> {
    let path = super::data_path()?;
    let store = super::load_store(&path)?;

    let needle = query.to_lowercase();
    let matches: Vec<&Event> = store
        .all()
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&needle)
                || e.description.to_lowercase().contains(&needle)
        })
        .collect();

    if matches.is_empty() {
        println!("{}", format!("No events matching \"{}\"", query).dimmed());
        return Ok(());
    }

    for event in matches {
        println!("{}", event.render());
    }

    Ok(())
}
