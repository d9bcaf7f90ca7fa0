//! Recurrence rules and occurrence expansion.
//!
//! Expands a recurring event into individual occurrences, each an
//! independent plain [`Event`] the caller owns outright. A rule repeats at
//! fixed intervals of a single unit and terminates either after a fixed
//! occurrence count or once an occurrence's start date passes an end date.

use std::fmt;

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Hard ceiling on end-date expansion. Guarantees termination even for
/// rules that never advance (see [`RecurrenceUnit::Unrecognized`]), so a
/// degenerate rule cannot pin the process in an unbounded loop.
pub const MAX_OCCURRENCES: usize = 10_000;

/// Time granularity of repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceUnit {
    Daily,
    Weekly,
    Monthly,
    /// A unit tag that didn't match any known unit, kept verbatim (after
    /// uppercasing) so it round-trips through the store file. Advancing by
    /// it is a no-op; expansion then relies on [`MAX_OCCURRENCES`].
    Unrecognized(String),
}

impl RecurrenceUnit {
    /// Parse a unit tag, case-insensitively.
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().to_uppercase();
        match normalized.as_str() {
            "DAILY" => RecurrenceUnit::Daily,
            "WEEKLY" => RecurrenceUnit::Weekly,
            "MONTHLY" => RecurrenceUnit::Monthly,
            _ => RecurrenceUnit::Unrecognized(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecurrenceUnit::Daily => "DAILY",
            RecurrenceUnit::Weekly => "WEEKLY",
            RecurrenceUnit::Monthly => "MONTHLY",
            RecurrenceUnit::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a recurrence decides when to stop generating occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Generate exactly this many occurrences. Zero means none.
    Count(u32),
    /// Generate occurrences whose start date does not exceed this date
    /// (inclusive).
    Until(NaiveDate),
}

/// A fixed-interval recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub unit: RecurrenceUnit,
    /// Every N units. Values below 1 are treated as 1.
    pub interval: u32,
    pub termination: Termination,
}

impl Recurrence {
    /// Rule terminated by a fixed occurrence count.
    pub fn count(unit: RecurrenceUnit, interval: u32, occurrences: u32) -> Self {
        Recurrence {
            unit,
            interval: interval.max(1),
            termination: Termination::Count(occurrences),
        }
    }

    /// Rule terminated by an inclusive end date.
    pub fn until(unit: RecurrenceUnit, interval: u32, end_date: NaiveDate) -> Self {
        Recurrence {
            unit,
            interval: interval.max(1),
            termination: Termination::Until(end_date),
        }
    }

    /// The start time of the occurrence following one at `current`.
    ///
    /// Monthly advancement keeps the day of month where possible and clamps
    /// to the last day of shorter months (Jan 31 + 1 month = Feb 29/28).
    /// An unrecognized unit returns `current` unchanged.
    pub fn next_occurrence(&self, current: NaiveDateTime) -> NaiveDateTime {
        let interval = self.interval.max(1);
        match &self.unit {
            RecurrenceUnit::Daily => current + Duration::days(i64::from(interval)),
            RecurrenceUnit::Weekly => current + Duration::weeks(i64::from(interval)),
            RecurrenceUnit::Monthly => current
                .checked_add_months(Months::new(interval))
                .unwrap_or(current),
            RecurrenceUnit::Unrecognized(_) => current,
        }
    }
}

/// Expand a recurring event into its individual occurrences.
///
/// Each occurrence is a plain event with the same id and description as the
/// definition, the title suffixed with its ordinal, and the defining
/// occurrence's duration (in whole minutes) reapplied to its own start.
/// Returns an empty list for events without a recurrence rule.
pub fn expand_occurrences(event: &Event) -> Vec<Event> {
    let Some(rule) = &event.recurrence else {
        return Vec::new();
    };

    let duration = Duration::minutes(event.duration_minutes());
    let mut occurrences = Vec::new();
    let mut start = event.start;

    match rule.termination {
        Termination::Count(count) => {
            for ordinal in 1..=count {
                occurrences.push(occurrence(event, ordinal, start, duration));
                start = rule.next_occurrence(start);
            }
        }
        Termination::Until(end_date) => {
            let mut ordinal = 1;
            while start.date() <= end_date {
                occurrences.push(occurrence(event, ordinal, start, duration));
                if occurrences.len() >= MAX_OCCURRENCES {
                    break;
                }
                start = rule.next_occurrence(start);
                ordinal += 1;
            }
        }
    }

    occurrences
}

fn occurrence(source: &Event, ordinal: u32, start: NaiveDateTime, duration: Duration) -> Event {
    Event::new(
        source.id,
        format!("{} (Occurrence {})", source.title, ordinal),
        source.description.clone(),
        start,
        start + duration,
    )
}
