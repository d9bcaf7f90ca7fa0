//! Core types for the agenda ecosystem.
//!
//! This crate provides everything the `agenda` CLI builds on:
//! - `Event` and the recurrence types for single and repeating events
//! - the recurrence engine (`expand_occurrences`)
//! - `EventStore`, the in-memory collection the session operates on
//! - the `csv` codec that persists the store to a flat file

pub mod agenda_config;
pub mod csv;
pub mod error;
pub mod event;
pub mod recurrence;
pub mod store;

pub use error::{AgendaError, AgendaResult};
pub use event::Event;
pub use recurrence::{Recurrence, RecurrenceUnit, Termination, expand_occurrences};
pub use store::EventStore;
