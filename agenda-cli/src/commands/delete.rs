use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(id: u32) -> Result<()> {
    let path = super::data_path()?;
    let mut store = super::load_store(&path)?;

    if !store.delete(id) {
        println!("{}", format!("No event with id {}", id).dimmed());
        return Ok(());
    }

    super::save_store(&store, &path)?;
    println!("{}", format!("  Deleted event {}", id).green());
    Ok(())
}
