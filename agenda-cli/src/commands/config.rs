use std::path::PathBuf;

use agenda_core::agenda_config::AgendaConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(data_file: Option<String>) -> Result<()> {
    if let Some(path) = data_file {
        let mut config = AgendaConfig::load()?;
        config.data_file = PathBuf::from(path);
        config.save()?;
        println!(
            "{}",
            format!("  Events file set to {}", config.data_path().display()).green()
        );
        return Ok(());
    }

    let config_path = AgendaConfig::config_path()?;
    let config = AgendaConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.data_path().display());

    Ok(())
}
