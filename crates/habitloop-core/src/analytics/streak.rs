//! Streak calculation over completion timestamps.
//!
//! The calculator is a pure function: it takes the raw timestamp strings for
//! one habit plus its periodicity and returns the longest run of consecutive
//! periods (calendar days or ISO calendar weeks) with at least one
//! completion each. Duplicate completions within a period fold to one, and
//! the result does not depend on input order.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::error::ValidationError;
use crate::habit::{Periodicity, TIMESTAMP_FORMAT};

/// Compute the longest streak for a set of completion timestamps.
///
/// Timestamps must match `YYYY-MM-DD HH:MM:SS`; a malformed entry is a
/// validation error, never silently skipped. Empty input yields 0; any
/// non-empty input yields at least 1.
///
/// # Errors
/// Returns [`ValidationError::InvalidTimestamp`] for the first timestamp
/// that fails to parse.
pub fn calculate_streak(
    timestamps: &[String],
    periodicity: Periodicity,
) -> Result<u32, ValidationError> {
    // Truncate to calendar dates; the set drops same-day duplicates and
    // keeps the scan order-independent.
    let mut dates = BTreeSet::new();
    for raw in timestamps {
        let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map_err(|_| ValidationError::InvalidTimestamp { value: raw.clone() })?;
        dates.insert(parsed.date());
    }

    Ok(match periodicity {
        Periodicity::Daily => longest_daily_run(&dates),
        Periodicity::Weekly => longest_weekly_run(&dates),
    })
}

fn longest_daily_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        current = match prev {
            Some(p) if p.succ_opt() == Some(date) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        prev = Some(date);
    }
    longest
}

fn longest_weekly_run(dates: &BTreeSet<NaiveDate>) -> u32 {
    // Two completions in the same ISO week fold to one period.
    let weeks: BTreeSet<(i32, u32)> = dates
        .iter()
        .map(|d| {
            let w = d.iso_week();
            (w.year(), w.week())
        })
        .collect();

    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<(i32, u32)> = None;

    for &week in &weeks {
        current = match prev {
            Some(p) if follows(p, week) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        prev = Some(week);
    }
    longest
}

/// Whether `(year, week)` is the ISO week immediately after
/// `(prev_year, prev_week)`.
fn follows((prev_year, prev_week): (i32, u32), (year, week): (i32, u32)) -> bool {
    if year == prev_year {
        week == prev_week + 1
    } else {
        // Year rollover: the previous week must be the final ISO week of
        // its year, which is 53 in leap-week years rather than 52.
        year == prev_year + 1 && week == 1 && prev_week == weeks_in_iso_year(prev_year)
    }
}

/// Number of ISO weeks (52 or 53) in the given ISO year.
fn weeks_in_iso_year(year: i32) -> u32 {
    if NaiveDate::from_isoywd_opt(year, 53, Weekday::Thu).is_some() {
        53
    } else {
        52
    }
}
