// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ConfdagError, Result};
use crate::fs::FileSystem;

/// Load a configuration file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file and validate it.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration for a run.
///
/// - An explicit path must exist.
/// - Without one, `Confdag.toml` is used if present, otherwise the built-in
///   defaults apply.
pub fn load_or_default(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            if !fs.is_file(path) {
                return Err(ConfdagError::ConfigError(format!(
                    "config file {:?} does not exist",
                    path
                )));
            }
            load_and_validate(fs, path)
        }
        None => {
            let path = default_config_path();
            if fs.is_file(&path) {
                debug!(path = ?path, "using default config file");
                load_and_validate(fs, &path)
            } else {
                debug!("no config file found; using built-in defaults");
                ConfigFile::try_from(RawConfigFile::default())
            }
        }
    }
}

/// Default config location: `Confdag.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Confdag.toml")
}
