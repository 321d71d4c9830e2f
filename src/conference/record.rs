// src/conference/record.rs

use crate::conference::date::{compute_day, DayOffset, DAYS_PER_YEAR};
use crate::errors::Result;

/// One submission cycle of a venue.
///
/// Values are never mutated after construction. Moving a deadline into the
/// next year produces a new record via [`Conference::shifted_by_year`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    name: String,
    area: String,
    page: String,
    column: String,
    submission_deadline_str: String,
    notification_date_str: String,
    submission_deadline: DayOffset,
    notification_date: DayOffset,
}

impl Conference {
    /// Build a record from its raw fields, computing the day offsets from
    /// the two date strings.
    pub fn new(
        name: impl Into<String>,
        area: impl Into<String>,
        page: impl Into<String>,
        column: impl Into<String>,
        submission_deadline_str: impl Into<String>,
        notification_date_str: impl Into<String>,
    ) -> Result<Self> {
        let submission_deadline_str = submission_deadline_str.into();
        let notification_date_str = notification_date_str.into();
        let (submission_deadline, notification_date) =
            compute_day(&submission_deadline_str, &notification_date_str)?;

        Ok(Self {
            name: name.into(),
            area: area.into(),
            page: page.into(),
            column: column.into(),
            submission_deadline_str,
            notification_date_str,
            submission_deadline,
            notification_date,
        })
    }

    /// Build a record with explicit offsets. The date strings are kept for
    /// display only and are not re-parsed.
    #[allow(clippy::too_many_arguments)]
    pub fn with_offsets(
        name: impl Into<String>,
        area: impl Into<String>,
        page: impl Into<String>,
        column: impl Into<String>,
        submission_deadline_str: impl Into<String>,
        notification_date_str: impl Into<String>,
        submission_deadline: DayOffset,
        notification_date: DayOffset,
    ) -> Self {
        Self {
            name: name.into(),
            area: area.into(),
            page: page.into(),
            column: column.into(),
            submission_deadline_str: submission_deadline_str.into(),
            notification_date_str: notification_date_str.into(),
            submission_deadline,
            notification_date,
        }
    }

    /// Same conference with both offsets moved one year later.
    pub fn shifted_by_year(&self) -> Self {
        Self {
            submission_deadline: self.submission_deadline + DAYS_PER_YEAR,
            notification_date: self.notification_date + DAYS_PER_YEAR,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn submission_deadline_str(&self) -> &str {
        &self.submission_deadline_str
    }

    pub fn notification_date_str(&self) -> &str {
        &self.notification_date_str
    }

    pub fn submission_deadline(&self) -> DayOffset {
        self.submission_deadline
    }

    pub fn notification_date(&self) -> DayOffset {
        self.notification_date
    }

    /// Venue series key: the name without its final character.
    ///
    /// `"FOO23"` and `"FOO24"` both give `"FOO2"`. Only one character is
    /// stripped, so some distinct venues share a series.
    pub fn series(&self) -> &str {
        match self.name.char_indices().next_back() {
            Some((idx, _)) => &self.name[..idx],
            None => "",
        }
    }

    pub fn is_same_series(&self, other: &Conference) -> bool {
        self.series() == other.series()
    }

    /// `true` when the notification comes strictly after the deadline.
    pub fn has_valid_window(&self) -> bool {
        self.notification_date > self.submission_deadline
    }

    /// Hover text shown for the node in the rendered graph.
    pub fn tooltip(&self) -> String {
        format!(
            "Area: {}\nSubmission deadline: {}\nNotification date: {}\nPage: {}\nColumn: {}",
            self.area,
            self.submission_deadline_str,
            self.notification_date_str,
            self.page,
            self.column
        )
    }
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
