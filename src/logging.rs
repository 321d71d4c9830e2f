// src/logging.rs

//! Logging for `confdag`.
//!
//! The level comes from `--log-level`, then `CONFDAG_LOG`, then `info`.
//! Everything goes to stderr so stdout stays free for the start-day prompt
//! and `--dry-run` output.

use anyhow::Result;
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "CONFDAG_LOG";

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, env.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("initialising logging: {e}"))?;

    Ok(())
}

/// Pick the effective level. Unrecognised env values fall back to `info`.
pub fn resolve_level(cli_level: Option<LogLevel>, env: Option<&str>) -> Level {
    cli_level
        .or_else(|| env.and_then(|s| LogLevel::from_str(s.trim(), true).ok()))
        .map(Level::from)
        .unwrap_or(Level::INFO)
}

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
