// src/dag/normalize.rs

use crate::conference::{Conference, DayOffset};

/// Move every conference whose deadline falls before `start_day` into the
/// next year.
///
/// Conferences on or after `start_day` are returned unchanged; the others
/// are replaced by new records with both offsets increased by 365.
pub fn normalize(conferences: &[Conference], start_day: DayOffset) -> Vec<Conference> {
    conferences
        .iter()
        .map(|c| {
            if c.submission_deadline() >= start_day {
                c.clone()
            } else {
                c.shifted_by_year()
            }
        })
        .collect()
}

/// Index of the conference whose deadline comes first after `start_day`.
///
/// Ties go to the earliest conference in input order. Returns `None` for an
/// empty slice.
pub fn next_conference(conferences: &[Conference], start_day: DayOffset) -> Option<usize> {
    conferences
        .iter()
        .enumerate()
        .min_by_key(|(idx, c)| (c.submission_deadline() - start_day, *idx))
        .map(|(idx, _)| idx)
}
