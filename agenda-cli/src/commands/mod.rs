//! CLI subcommands.
//!
//! Every command follows the same session shape: load the config, load the
//! store from the data file, operate, and (for mutating commands) write the
//! whole store back out.

pub mod add;
pub mod config;
pub mod delete;
pub mod expand;
pub mod list;
pub mod search;
pub mod show;
pub mod upcoming;

use std::path::{Path, PathBuf};

use agenda_core::agenda_config::AgendaConfig;
use agenda_core::{csv, EventStore};
use anyhow::{Context, Result};

/// Resolve the events file from the global config.
pub(crate) fn data_path() -> Result<PathBuf> {
    let config = AgendaConfig::load()?;
    Ok(config.data_path())
}

pub(crate) fn load_store(path: &Path) -> Result<EventStore> {
    let mut store = EventStore::new();
    csv::load_events(&mut store, path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(store)
}

pub(crate) fn save_store(store: &EventStore, path: &Path) -> Result<()> {
    csv::save_events(store, path).with_context(|| format!("Failed to save {}", path.display()))
}
