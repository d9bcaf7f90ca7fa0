//! Record parsing for the events file.

use chrono::NaiveDateTime;

use super::DATETIME_FORMAT;
use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;
use crate::recurrence::{Recurrence, RecurrenceUnit};

/// Parse one record line into an [`Event`]. `line_no` is 1-based and only
/// used for error reporting.
///
/// Fields are positional with no escaping, so an embedded comma shifts
/// everything after it and surfaces as a parse error downstream.
pub fn parse_line(line: &str, line_no: usize) -> AgendaResult<Event> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return Err(malformed(
            line_no,
            format!("expected at least 6 fields, got {}", fields.len()),
        ));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| malformed(line_no, format!("invalid event id '{}'", fields[0])))?;
    let title = fields[2].to_string();
    let description = fields[3].to_string();
    let start = parse_datetime(fields[4], line_no)?;
    let end = parse_datetime(fields[5], line_no)?;

    // Field 1 tags the variant; anything other than RECURRING reads as a
    // plain event.
    if fields[1] != "RECURRING" {
        return Ok(Event::new(id, title, description, start, end));
    }

    if fields.len() < 8 {
        return Err(malformed(
            line_no,
            format!("recurring record needs 8 fields, got {}", fields.len()),
        ));
    }
    let unit = RecurrenceUnit::parse(fields[6]);
    let occurrences: u32 = fields[7]
        .parse()
        .map_err(|_| malformed(line_no, format!("invalid occurrence count '{}'", fields[7])))?;

    Ok(Event::recurring(
        id,
        title,
        description,
        start,
        end,
        Recurrence::count(unit, 1, occurrences),
    ))
}

fn parse_datetime(value: &str, line_no: usize) -> AgendaResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|_| {
        malformed(
            line_no,
            format!("invalid date-time '{}' (expected YYYY-MM-DD HH:MM)", value),
        )
    })
}

fn malformed(line: usize, reason: String) -> AgendaError {
    AgendaError::Parse { line, reason }
}
