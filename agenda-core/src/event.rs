//! Calendar event types.
//!
//! A single `Event` struct covers both one-off and recurring events: the
//! optional `recurrence` payload is what makes an event repeat. The store
//! and codec treat both shapes uniformly.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned integer id, unique within a session.
    pub id: u32,
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Recurrence rule for repeating events; `None` for one-off events.
    pub recurrence: Option<Recurrence>,
}

impl Event {
    /// Create a one-off event.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Event {
            id,
            title: title.into(),
            description: description.into(),
            start,
            end,
            recurrence: None,
        }
    }

    /// Create a recurring event from the first occurrence's times and a rule.
    pub fn recurring(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        recurrence: Recurrence,
    ) -> Self {
        Event {
            recurrence: Some(recurrence),
            ..Event::new(id, title, description, start, end)
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Duration of one occurrence in whole minutes (sub-minute remainder
    /// truncates, matching the persisted minute precision).
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
