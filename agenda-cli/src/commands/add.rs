use agenda_core::csv::DATETIME_FORMAT;
use agenda_core::{Event, Recurrence, RecurrenceUnit};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;

#[allow(clippy::too_many_arguments)]
pub fn run(
    title: String,
    start: String,
    end: Option<String>,
    description: Option<String>,
    every: Option<String>,
    interval: u32,
    count: Option<u32>,
    until: Option<String>,
) -> Result<()> {
    let start = parse_datetime(&start)?;
    let end = match end {
        Some(input) => parse_datetime(&input)?,
        None => start + Duration::hours(1),
    };
    if end < start {
        anyhow::bail!(
            "End {} is before start {}",
            end.format(DATETIME_FORMAT),
            start.format(DATETIME_FORMAT)
        );
    }

    let recurrence = build_recurrence(every.as_deref(), interval, count, until.as_deref())?;

    let path = super::data_path()?;
    let mut store = super::load_store(&path)?;

    let id = store.generate_id();
    let event = match recurrence {
        Some(rule) => Event::recurring(
            id,
            title,
            description.unwrap_or_default(),
            start,
            end,
            rule,
        ),
        None => Event::new(id, title, description.unwrap_or_default(), start, end),
    };
    let created = format!("  Created #{}: {}", event.id, event.title);

    store.add(event);
    super::save_store(&store, &path)?;

    println!("{}", created.green());
    Ok(())
}

/// Build the recurrence rule from the repeat flags, if any.
///
/// An occurrence count wins over an end date when both are given.
fn build_recurrence(
    every: Option<&str>,
    interval: u32,
    count: Option<u32>,
    until: Option<&str>,
) -> Result<Option<Recurrence>> {
    let Some(unit_tag) = every else {
        if count.is_some() || until.is_some() {
            anyhow::bail!("--count and --until need --every");
        }
        return Ok(None);
    };

    let unit = RecurrenceUnit::parse(unit_tag);
    if matches!(unit, RecurrenceUnit::Unrecognized(_)) {
        anyhow::bail!(
            "Unknown repeat unit '{}' (expected daily, weekly or monthly)",
            unit_tag
        );
    }

    match (count, until) {
        (Some(0), None) => anyhow::bail!("--count must be positive"),
        (Some(n), _) if n > 0 => Ok(Some(Recurrence::count(unit, interval, n))),
        (_, Some(date_input)) => Ok(Some(Recurrence::until(
            unit,
            interval,
            parse_date(date_input)?,
        ))),
        _ => anyhow::bail!("Repeating events need --count or --until"),
    }
}

fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT).map_err(|_| {
        anyhow::anyhow!(
            "Could not parse date/time \"{}\" (expected YYYY-MM-DD HH:MM)",
            input
        )
    })
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Could not parse date \"{}\" (expected YYYY-MM-DD)", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::Termination;

    // --- parse_datetime ---

    #[test]
    fn parse_datetime_minute_precision() {
        let dt = parse_datetime("2024-03-01 12:30").unwrap();
        assert_eq!(dt.format(DATETIME_FORMAT).to_string(), "2024-03-01 12:30");
    }

    #[test]
    fn parse_datetime_trims_whitespace() {
        assert!(parse_datetime("  2024-03-01 12:30 ").is_ok());
    }

    #[test]
    fn parse_datetime_rejects_date_only() {
        assert!(parse_datetime("2024-03-01").is_err());
    }

    #[test]
    fn parse_datetime_rejects_garbage() {
        assert!(parse_datetime("next tuesday").is_err());
    }

    // --- build_recurrence ---

    #[test]
    fn no_repeat_flags_means_no_rule() {
        assert!(build_recurrence(None, 1, None, None).unwrap().is_none());
    }

    #[test]
    fn count_flag_builds_count_rule() {
        let rule = build_recurrence(Some("daily"), 1, Some(3), None)
            .unwrap()
            .unwrap();
        assert_eq!(rule.termination, Termination::Count(3));
    }

    #[test]
    fn until_flag_builds_end_date_rule() {
        let rule = build_recurrence(Some("weekly"), 2, None, Some("2024-02-01"))
            .unwrap()
            .unwrap();
        assert_eq!(rule.interval, 2);
        assert_eq!(
            rule.termination,
            Termination::Until(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
    }

    #[test]
    fn count_wins_over_until_when_both_are_given() {
        let rule = build_recurrence(Some("daily"), 1, Some(5), Some("2024-02-01"))
            .unwrap()
            .unwrap();
        assert_eq!(rule.termination, Termination::Count(5));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        assert!(build_recurrence(Some("fortnightly"), 1, Some(3), None).is_err());
    }

    #[test]
    fn repeat_without_termination_is_rejected() {
        assert!(build_recurrence(Some("daily"), 1, None, None).is_err());
    }

    #[test]
    fn termination_without_repeat_unit_is_rejected() {
        assert!(build_recurrence(None, 1, Some(3), None).is_err());
    }
}
