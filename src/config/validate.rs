// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ConfdagError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ConfdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_paths(cfg)?;
    validate_palette(cfg)?;
    validate_layout(cfg)?;
    validate_filter(cfg)?;
    Ok(())
}

fn validate_paths(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.input.trim().is_empty() {
        return Err(ConfdagError::ConfigError(
            "[config].input must not be empty".to_string(),
        ));
    }
    if cfg.config.output.trim().is_empty() {
        return Err(ConfdagError::ConfigError(
            "[config].output must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_palette(cfg: &RawConfigFile) -> Result<()> {
    if cfg.palette.is_empty() {
        return Err(ConfdagError::ConfigError(
            "[palette] must map at least one area to a colour".to_string(),
        ));
    }
    for (area, color) in cfg.palette.iter() {
        if color.trim().is_empty() {
            return Err(ConfdagError::ConfigError(format!(
                "[palette].{} has an empty colour",
                area
            )));
        }
    }
    Ok(())
}

fn validate_layout(cfg: &RawConfigFile) -> Result<()> {
    if cfg.layout.x_spacing <= 0 {
        return Err(ConfdagError::ConfigError(format!(
            "[layout].x_spacing must be > 0 (got {})",
            cfg.layout.x_spacing
        )));
    }
    if cfg.layout.y_spacing <= 0 {
        return Err(ConfdagError::ConfigError(format!(
            "[layout].y_spacing must be > 0 (got {})",
            cfg.layout.y_spacing
        )));
    }
    Ok(())
}

fn validate_filter(cfg: &RawConfigFile) -> Result<()> {
    for area in cfg.filter.areas.iter() {
        if !cfg.palette.contains_key(area) {
            return Err(ConfdagError::ConfigError(format!(
                "[filter].areas lists '{}' which has no [palette] entry",
                area
            )));
        }
    }
    Ok(())
}
