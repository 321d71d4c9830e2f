// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// input = "conferences.csv"
/// output = "your_submission_opportunity.html"
///
/// [filter]
/// areas = ["AI", "Sys"]
///
/// [palette]
/// AI = "purple"
///
/// [layout]
/// x_spacing = 150
/// ```
///
/// All sections are optional and have defaults matching the stock setup.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub filter: FilterSection,

    /// Area -> colour table used to paint nodes.
    #[serde(default = "default_palette")]
    pub palette: BTreeMap<String, String>,

    #[serde(default)]
    pub layout: LayoutSection,
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            config: ConfigSection::default(),
            filter: FilterSection::default(),
            palette: default_palette(),
            layout: LayoutSection::default(),
        }
    }
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub filter: FilterSection,
    pub palette: BTreeMap<String, String>,
    pub layout: LayoutSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            config: raw.config,
            filter: raw.filter,
            palette: raw.palette,
            layout: raw.layout,
        }
    }
}

/// `[config]` section: input and output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    #[serde(default = "default_input")]
    pub input: String,

    #[serde(default = "default_output")]
    pub output: String,
}

fn default_input() -> String {
    "conferences.csv".to_string()
}

fn default_output() -> String {
    "your_submission_opportunity.html".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// `[filter]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FilterSection {
    /// Areas to keep; empty keeps all.
    #[serde(default)]
    pub areas: Vec<String>,

    /// Conference names to drop.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// `[layout]` section: spacing of the leveled layout and node styling.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct LayoutSection {
    #[serde(default = "default_x_spacing")]
    pub x_spacing: i64,

    #[serde(default = "default_y_spacing")]
    pub y_spacing: i64,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_node_size")]
    pub node_size: u32,
}

fn default_x_spacing() -> i64 {
    150
}

fn default_y_spacing() -> i64 {
    200
}

fn default_font_size() -> u32 {
    32
}

fn default_node_size() -> u32 {
    30
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            x_spacing: default_x_spacing(),
            y_spacing: default_y_spacing(),
            font_size: default_font_size(),
            node_size: default_node_size(),
        }
    }
}

/// Stock area -> colour table.
pub fn default_palette() -> BTreeMap<String, String> {
    [
        ("ARCH", "gold"),
        ("Security", "blue"),
        ("PL", "green"),
        ("Sys", "red"),
        ("AI", "purple"),
    ]
    .into_iter()
    .map(|(area, color)| (area.to_string(), color.to_string()))
    .collect()
}
