// src/render/palette.rs

use std::collections::BTreeMap;

use crate::conference::Conference;
use crate::config::ConfigFile;
use crate::errors::{ConfdagError, Result};

/// Area -> node colour table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    pub fn new(colors: BTreeMap<String, String>) -> Self {
        Self { colors }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(cfg.palette.clone())
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(|s| s.as_str())
    }

    /// Colour for a conference, or [`ConfdagError::UnknownArea`].
    pub fn color_for(&self, conference: &Conference) -> Result<&str> {
        self.colors
            .get(conference.area())
            .map(|s| s.as_str())
            .ok_or_else(|| ConfdagError::UnknownArea {
                name: conference.name().to_string(),
                area: conference.area().to_string(),
            })
    }

    /// Fail on the first conference whose area has no colour.
    pub fn check_all<'a>(&self, conferences: impl IntoIterator<Item = &'a Conference>) -> Result<()> {
        for c in conferences {
            self.color_for(c)?;
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(crate::config::model::default_palette())
    }
}
