// src/config/mod.rs

//! Configuration loading and validation for confdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the filesystem seam (`loader.rs`).
//! - Validate the palette, layout and filter sections (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, ConfigSection, FilterSection, LayoutSection, RawConfigFile};
