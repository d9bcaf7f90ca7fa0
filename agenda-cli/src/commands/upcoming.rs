use agenda_core::{expand_occurrences, Event};
use anyhow::Result;
use chrono::Duration;
use owo_colors::OwoColorize;

use crate::render::Render;

/// Show events starting within the next `within` minutes, expanding
/// recurring events so individual occurrences can trigger.
pub fn run(within: i64) -> Result<()> {
    let path = super::data_path()?;
    let store = super::load_store(&path)?;

    let now = chrono::Local::now().naive_local();
    let horizon = now + Duration::minutes(within);

    let mut upcoming: Vec<Event> = Vec::new();
    for event in store.all() {
        if event.is_recurring() {
            upcoming.extend(
                expand_occurrences(event)
                    .into_iter()
                    .filter(|occ| occ.start >= now && occ.start <= horizon),
            );
        } else if event.start >= now && event.start <= horizon {
            upcoming.push(event.clone());
        }
    }
    upcoming.sort_by_key(|e| e.start);

    if upcoming.is_empty() {
        println!(
            "{}",
            format!("Nothing in the next {} minutes", within).dimmed()
        );
        return Ok(());
    }

    for event in &upcoming {
        println!("{}", event.render());
    }

    Ok(())
}
