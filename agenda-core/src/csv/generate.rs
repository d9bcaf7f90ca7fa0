//! Record generation for the events file.

use super::DATETIME_FORMAT;
use crate::event::Event;
use crate::recurrence::Termination;

/// Encode one event as a record line (without trailing newline).
///
/// Recurring records carry only the unit and occurrence count: an end-date
/// rule writes count 0 and a custom interval is not encoded, so both reload
/// as a count-based rule with interval 1. Titles and descriptions are
/// written verbatim; an embedded comma corrupts the record on reload.
pub fn event_line(event: &Event) -> String {
    let start = event.start.format(DATETIME_FORMAT);
    let end = event.end.format(DATETIME_FORMAT);

    match &event.recurrence {
        None => format!(
            "{},NORMAL,{},{},{},{}",
            event.id, event.title, event.description, start, end
        ),
        Some(rule) => {
            let occurrences = match rule.termination {
                Termination::Count(n) => n,
                Termination::Until(_) => 0,
            };
            format!(
                "{},RECURRING,{},{},{},{},{},{}",
                event.id,
                event.title,
                event.description,
                start,
                end,
                rule.unit.as_str(),
                occurrences
            )
        }
    }
}
