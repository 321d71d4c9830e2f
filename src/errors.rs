// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant belongs to one pipeline stage (see [`ConfdagError::stage`])
//! so the binary can tell the user where a run stopped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfdagError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("conference '{name}' has area '{area}' which is not in the palette")]
    UnknownArea { name: String, area: String },

    #[error("Cycle detected in conference graph: {0}")]
    Cycle(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Conference not found: {0}")]
    ConferenceNotFound(String),

    #[error("invalid answer to prompt: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConfdagError {
    /// Pipeline stage the error belongs to, used in the final diagnostic.
    pub fn stage(&self) -> &'static str {
        match self {
            ConfdagError::Parse { .. } | ConfdagError::InvalidDate { .. } | ConfdagError::Csv(_) => {
                "parse"
            }
            ConfdagError::UnknownArea { .. } => "categorize",
            ConfdagError::Cycle(_) | ConfdagError::Render(_) => "render",
            ConfdagError::ConfigError(_) | ConfdagError::TomlError(_) => "config",
            ConfdagError::ConferenceNotFound(_) | ConfdagError::Prompt(_) => "start-day",
            ConfdagError::IoError(_) | ConfdagError::Other(_) => "io",
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ConfdagError>;
