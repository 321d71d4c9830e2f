// src/conference/filter.rs

use crate::conference::record::Conference;

/// Keep only the conferences for which `predicate` returns `true`.
pub fn apply_filter<F>(conferences: Vec<Conference>, predicate: F) -> Vec<Conference>
where
    F: Fn(&Conference) -> bool,
{
    conferences.into_iter().filter(|c| predicate(c)).collect()
}

/// Area/name based selection, built from `[filter]` and `--area`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaFilter {
    /// Areas to keep. Empty means every area is kept.
    pub include_areas: Vec<String>,
    /// Conference names to drop regardless of area.
    pub exclude_names: Vec<String>,
}

impl AreaFilter {
    pub fn new(include_areas: Vec<String>, exclude_names: Vec<String>) -> Self {
        Self {
            include_areas,
            exclude_names,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.include_areas.is_empty() && self.exclude_names.is_empty()
    }

    pub fn matches(&self, conference: &Conference) -> bool {
        let area_ok = self.include_areas.is_empty()
            || self.include_areas.iter().any(|a| a == conference.area());
        let name_ok = !self.exclude_names.iter().any(|n| n == conference.name());
        area_ok && name_ok
    }

    /// Apply this filter to a loaded set.
    pub fn apply(&self, conferences: Vec<Conference>) -> Vec<Conference> {
        if self.is_noop() {
            return conferences;
        }
        apply_filter(conferences, |c| self.matches(c))
    }
}
