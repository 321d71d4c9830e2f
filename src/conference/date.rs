// src/conference/date.rs

//! Simplified calendar used to compare deadlines.
//!
//! Every month counts as exactly 30 days and every year as 365, so a date
//! becomes `day + month * 30 + year_offset * 365`. This is not real calendar
//! arithmetic; offsets are only meant to be compared with each other.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{ConfdagError, Result};

/// Integer "day unit" on the simplified calendar.
pub type DayOffset = i64;

pub const DAYS_PER_MONTH: DayOffset = 30;
pub const DAYS_PER_YEAR: DayOffset = 365;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("date regex is valid")
});

/// A `YYYY-MM-DD` date split into its numeric parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

/// Parse a `YYYY-MM-DD` string.
///
/// Month must be in `1..=12` and day in `1..=31`. No further calendar
/// validation is done (`2024-02-31` is accepted).
pub fn parse_date(value: &str) -> Result<CalendarDate> {
    let invalid = |reason: &str| ConfdagError::InvalidDate {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = DATE_RE
        .captures(value)
        .ok_or_else(|| invalid("expected YYYY-MM-DD"))?;

    let year: i64 = caps[1].parse().map_err(|_| invalid("bad year"))?;
    let month: u32 = caps[2].parse().map_err(|_| invalid("bad month"))?;
    let day: u32 = caps[3].parse().map_err(|_| invalid("bad day"))?;

    if !(1..=12).contains(&month) {
        return Err(invalid("month out of range"));
    }
    if !(1..=31).contains(&day) {
        return Err(invalid("day out of range"));
    }

    Ok(CalendarDate { year, month, day })
}

/// Day unit of a month/day pair within a single year.
pub fn day_unit(month: u32, day: u32) -> DayOffset {
    DayOffset::from(day) + DayOffset::from(month) * DAYS_PER_MONTH
}

/// Convert a submission/notification pair into day offsets.
///
/// The submission year is the origin; the notification is pushed forward by
/// `365 * (notification_year - submission_year)`.
pub fn compute_day(submission: &str, notification: &str) -> Result<(DayOffset, DayOffset)> {
    let s = parse_date(submission)?;
    let n = parse_date(notification)?;

    let year_offset = n.year - s.year;
    let s_time = day_unit(s.month, s.day);
    let n_time = day_unit(n.month, n.day) + year_offset * DAYS_PER_YEAR;

    Ok((s_time, n_time))
}
