//! Line-oriented CSV persistence for the event store.
//!
//! One record per line, comma-separated, no quoting or escaping. The file
//! is read wholesale at startup and overwritten wholesale on save.

mod generate;
mod parse;

pub use generate::event_line;
pub use parse::parse_line;

use std::path::Path;

use crate::error::AgendaResult;
use crate::store::EventStore;

/// Default store file, relative to the working directory.
pub const EVENTS_FILE: &str = "events.csv";

/// Timestamp format used in records. Minute precision: seconds are not
/// preserved across a save/load round-trip.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Serialize the full store to `path`, one record per line.
pub fn save_events(store: &EventStore, path: &Path) -> AgendaResult<()> {
    let mut out = String::new();
    for event in store.all() {
        out.push_str(&event_line(event));
        out.push('\n');
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Load records from `path` into `store` and restore the id counter to one
/// past the highest id seen.
///
/// A missing file is not an error: the store is left as it was. A malformed
/// row aborts the load; rows read before it remain in the store and the id
/// counter stays untouched.
pub fn load_events(store: &mut EventStore, path: &Path) -> AgendaResult<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;

    let mut max_id = 0;
    for (index, line) in content.lines().enumerate() {
        let event = parse_line(line, index + 1)?;
        max_id = max_id.max(event.id);
        store.add(event);
    }

    store.set_next_id(max_id + 1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use crate::event::Event;
    use crate::recurrence::{Recurrence, RecurrenceUnit, Termination};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn temp_store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join(EVENTS_FILE)
    }

    #[test]
    fn save_then_load_reproduces_plain_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        store.add(Event::new(
            1,
            "Lunch",
            "",
            dt(2024, 3, 1, 12, 0),
            dt(2024, 3, 1, 13, 0),
        ));
        store.add(Event::new(
            2,
            "Dentist",
            "bring referral",
            dt(2024, 3, 4, 8, 30),
            dt(2024, 3, 4, 9, 15),
        ));
        save_events(&store, &path).unwrap();

        let mut loaded = EventStore::new();
        load_events(&mut loaded, &path).unwrap();

        assert_eq!(loaded.all(), store.all());
        assert_eq!(loaded.generate_id(), 3);
    }

    #[test]
    fn load_restores_next_id_past_the_highest_seen() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        store.add(Event::new(
            9,
            "Late",
            "",
            dt(2024, 3, 1, 12, 0),
            dt(2024, 3, 1, 13, 0),
        ));
        store.add(Event::new(
            4,
            "Early",
            "",
            dt(2024, 3, 2, 12, 0),
            dt(2024, 3, 2, 13, 0),
        ));
        save_events(&store, &path).unwrap();

        let mut loaded = EventStore::new();
        load_events(&mut loaded, &path).unwrap();
        assert_eq!(loaded.generate_id(), 10);
    }

    #[test]
    fn seconds_truncate_to_minute_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let start = dt(2024, 3, 1, 12, 0) + chrono::Duration::seconds(42);
        let mut store = EventStore::new();
        store.add(Event::new(
            1,
            "Call",
            "",
            start,
            start + chrono::Duration::minutes(30),
        ));
        save_events(&store, &path).unwrap();

        let mut loaded = EventStore::new();
        load_events(&mut loaded, &path).unwrap();
        assert_eq!(loaded.all()[0].start, dt(2024, 3, 1, 12, 0));
    }

    #[test]
    fn recurring_round_trip_keeps_unit_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        store.add(Event::recurring(
            1,
            "Standup",
            "",
            dt(2024, 1, 1, 9, 0),
            dt(2024, 1, 1, 9, 15),
            Recurrence::count(RecurrenceUnit::Weekly, 1, 20),
        ));
        save_events(&store, &path).unwrap();

        let mut loaded = EventStore::new();
        load_events(&mut loaded, &path).unwrap();

        let rule = loaded.all()[0].recurrence.as_ref().unwrap();
        assert_eq!(rule.unit, RecurrenceUnit::Weekly);
        assert_eq!(rule.termination, Termination::Count(20));
    }

    #[test]
    fn end_date_rule_degrades_to_count_zero_on_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        store.add(Event::recurring(
            1,
            "Sync",
            "",
            dt(2024, 1, 1, 9, 0),
            dt(2024, 1, 1, 9, 30),
            Recurrence::until(
                RecurrenceUnit::Weekly,
                2,
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ),
        ));
        save_events(&store, &path).unwrap();

        let mut loaded = EventStore::new();
        load_events(&mut loaded, &path).unwrap();

        // The record format carries neither end dates nor intervals.
        let rule = loaded.all()[0].recurrence.as_ref().unwrap();
        assert_eq!(rule.termination, Termination::Count(0));
        assert_eq!(rule.interval, 1);
    }

    #[test]
    fn missing_file_leaves_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        load_events(&mut store, &path).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.generate_id(), 1);
    }

    #[test]
    fn malformed_row_aborts_load_and_keeps_prior_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);
        std::fs::write(
            &path,
            "1,NORMAL,Lunch,,2024-03-01 12:00,2024-03-01 13:00\n\
             oops,NORMAL,Broken,,2024-03-02 12:00,2024-03-02 13:00\n\
             3,NORMAL,Never loaded,,2024-03-03 12:00,2024-03-03 13:00\n",
        )
        .unwrap();

        let mut store = EventStore::new();
        let err = load_events(&mut store, &path).unwrap_err();

        assert!(matches!(err, AgendaError::Parse { line: 2, .. }));
        // Partial state: the first row stays, the counter does not move.
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].title, "Lunch");
        assert_eq!(store.generate_id(), 1);
    }

    #[test]
    fn comma_in_title_corrupts_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_store_path(&dir);

        let mut store = EventStore::new();
        store.add(Event::new(
            1,
            "Lunch, then coffee",
            "",
            dt(2024, 3, 1, 12, 0),
            dt(2024, 3, 1, 13, 0),
        ));
        save_events(&store, &path).unwrap();

        // Fields shift by one, so the date lands on a non-date field.
        let mut loaded = EventStore::new();
        assert!(load_events(&mut loaded, &path).is_err());
    }
}
