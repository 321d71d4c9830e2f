use std::collections::BTreeMap;

use confdag::conference::{Conference, DayOffset};
use confdag::config::{ConfigFile, RawConfigFile};

/// Builder for `Conference` records with explicit day offsets.
///
/// Offsets are set directly, so graph tests can be written in plain day
/// units without going through date strings.
pub struct ConferenceBuilder {
    name: String,
    area: String,
    page: String,
    column: String,
    submission_str: String,
    notification_str: String,
    submission: DayOffset,
    notification: DayOffset,
}

impl ConferenceBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            area: "AI".to_string(),
            page: "1".to_string(),
            column: "1".to_string(),
            submission_str: String::new(),
            notification_str: String::new(),
            submission: 0,
            notification: 1,
        }
    }

    pub fn area(mut self, area: &str) -> Self {
        self.area = area.to_string();
        self
    }

    pub fn page(mut self, page: &str) -> Self {
        self.page = page.to_string();
        self
    }

    pub fn column(mut self, column: &str) -> Self {
        self.column = column.to_string();
        self
    }

    /// Submission deadline and notification date in day units.
    pub fn window(mut self, submission: DayOffset, notification: DayOffset) -> Self {
        self.submission = submission;
        self.notification = notification;
        self
    }

    /// Display strings; offsets are left as set by [`Self::window`].
    pub fn dates(mut self, submission: &str, notification: &str) -> Self {
        self.submission_str = submission.to_string();
        self.notification_str = notification.to_string();
        self
    }

    pub fn build(self) -> Conference {
        let submission_str = if self.submission_str.is_empty() {
            format!("day {}", self.submission)
        } else {
            self.submission_str
        };
        let notification_str = if self.notification_str.is_empty() {
            format!("day {}", self.notification)
        } else {
            self.notification_str
        };
        Conference::with_offsets(
            self.name,
            self.area,
            self.page,
            self.column,
            submission_str,
            notification_str,
            self.submission,
            self.notification,
        )
    }
}

/// Shorthand for `ConferenceBuilder::new(name).window(sub, notif).build()`.
pub fn conf(name: &str, submission: DayOffset, notification: DayOffset) -> Conference {
    ConferenceBuilder::new(name)
        .window(submission, notification)
        .build()
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    /// The area must also be in the palette or `build` panics.
    pub fn with_area_filter(mut self, area: &str) -> Self {
        self.config.filter.areas.push(area.to_string());
        self
    }

    pub fn excluding(mut self, name: &str) -> Self {
        self.config.filter.exclude.push(name.to_string());
        self
    }

    pub fn with_palette(mut self, palette: &[(&str, &str)]) -> Self {
        self.config.palette = palette
            .iter()
            .map(|(a, c)| (a.to_string(), c.to_string()))
            .collect::<BTreeMap<_, _>>();
        self
    }

    pub fn spacing(mut self, x: i64, y: i64) -> Self {
        self.config.layout.x_spacing = x;
        self.config.layout.y_spacing = y;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
