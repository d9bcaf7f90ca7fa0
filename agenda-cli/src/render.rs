//! Terminal rendering for agenda-core types.
//!
//! Extension trait adding colored one-line rendering to events, in the
//! same shape every listing command uses.

use agenda_core::csv::DATETIME_FORMAT;
use agenda_core::recurrence::{Recurrence, RecurrenceUnit, Termination};
use agenda_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        let mut line = format!("  {} {}  {}", id.dimmed(), render_span(self), self.title);

        if let Some(rule) = &self.recurrence {
            line.push(' ');
            line.push_str(&render_rule(rule).dimmed().to_string());
        }

        line
    }
}

/// Format an event's start and end, folding same-day ends down to a time.
pub fn render_span(event: &Event) -> String {
    if event.start.date() == event.end.date() {
        format!(
            "{} to {}",
            event.start.format(DATETIME_FORMAT),
            event.end.format("%H:%M")
        )
    } else {
        format!(
            "{} to {}",
            event.start.format(DATETIME_FORMAT),
            event.end.format(DATETIME_FORMAT)
        )
    }
}

/// Human-readable recurrence summary, e.g. "[every 2 weeks, until 2024-02-01]".
pub fn render_rule(rule: &Recurrence) -> String {
    let unit = unit_word(&rule.unit);
    let every = if rule.interval == 1 {
        format!("every {}", unit)
    } else {
        format!("every {} {}s", rule.interval, unit)
    };

    match &rule.termination {
        Termination::Count(n) => format!("[{}, {} times]", every, n),
        Termination::Until(date) => format!("[{}, until {}]", every, date),
    }
}

fn unit_word(unit: &RecurrenceUnit) -> String {
    match unit {
        RecurrenceUnit::Daily => "day".to_string(),
        RecurrenceUnit::Weekly => "week".to_string(),
        RecurrenceUnit::Monthly => "month".to_string(),
        RecurrenceUnit::Unrecognized(tag) => tag.to_lowercase(),
    }
}
