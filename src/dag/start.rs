// src/dag/start.rs

//! Reference start day for the rolling one-year window.

use std::io::{BufRead, Write};

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::conference::date::{day_unit, DayOffset};
use crate::conference::Conference;
use crate::errors::{ConfdagError, Result};

/// Where the rolling window starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPoint {
    /// `n` days after today (may be negative).
    DaysFromNow(i64),
    /// The (un-normalised) submission deadline of the named conference.
    Conference(String),
}

/// Day unit of a calendar date; the year is ignored.
pub fn start_day_for_date(date: NaiveDate) -> DayOffset {
    day_unit(date.month(), date.day())
}

/// Start day `days_from_now` days after `today`.
pub fn start_day_from_now(today: NaiveDate, days_from_now: i64) -> Result<DayOffset> {
    let delta = TimeDelta::try_days(days_from_now).ok_or_else(|| {
        ConfdagError::Prompt(format!("{days_from_now} days is out of range"))
    })?;
    let date = today.checked_add_signed(delta).ok_or_else(|| {
        ConfdagError::Prompt(format!("{days_from_now} days from {today} is out of range"))
    })?;
    Ok(start_day_for_date(date))
}

/// Start day at a given conference's submission deadline.
pub fn start_day_at_conference(conferences: &[Conference], name: &str) -> Result<DayOffset> {
    conferences
        .iter()
        .find(|c| c.name() == name)
        .map(|c| c.submission_deadline())
        .ok_or_else(|| ConfdagError::ConferenceNotFound(name.to_string()))
}

/// Resolve a [`StartPoint`] against `today` and the loaded conferences.
pub fn resolve_start_day(
    start: &StartPoint,
    today: NaiveDate,
    conferences: &[Conference],
) -> Result<DayOffset> {
    match start {
        StartPoint::DaysFromNow(days) => start_day_from_now(today, *days),
        StartPoint::Conference(name) => start_day_at_conference(conferences, name),
    }
}

/// Ask how many days from now the paper will be submitted.
pub fn prompt_days_from_now<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    write!(
        output,
        "Please enter the days from now you want to submit your paper: "
    )?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(ConfdagError::Prompt("no input given".to_string()));
    }

    let answer = line.trim();
    answer
        .parse::<i64>()
        .map_err(|_| ConfdagError::Prompt(format!("'{answer}' is not an integer")))
}
