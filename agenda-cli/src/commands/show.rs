use agenda_core::expand_occurrences;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::{render_rule, render_span};

pub fn run(id: u32) -> Result<()> {
    let path = super::data_path()?;
    let store = super::load_store(&path)?;

    let Some(event) = store.find_by_id(id) else {
        println!("{}", format!("No event with id {}", id).dimmed());
        return Ok(());
    };

    println!("{}", event.title.bold());
    println!("  Id:    #{}", event.id);
    println!("  When:  {}", render_span(event));
    if !event.description.is_empty() {
        println!("  Notes: {}", event.description);
    }
    if let Some(rule) = &event.recurrence {
        println!("  Repeats: {}", render_rule(rule));
        println!("  Occurrences: {}", expand_occurrences(event).len());
    }

    Ok(())
}
