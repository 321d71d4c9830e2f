// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `confdag`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "confdag",
    version,
    about = "Chart which conference results arrive before which deadlines.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Confdag.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Conference CSV (`name,area,deadline,notification,page,column`).
    ///
    /// Overrides `[config].input`.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Where to write the HTML page. Overrides `[config].output`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Days from now you want to submit. Prompted for when omitted.
    #[arg(long, value_name = "N", allow_negative_numbers = true, conflicts_with = "from_conference")]
    pub days: Option<i64>,

    /// Start the window at this conference's submission deadline instead.
    #[arg(long, value_name = "NAME")]
    pub from_conference: Option<String>,

    /// Only keep conferences in this area (repeatable). Overrides `[filter].areas`.
    #[arg(long = "area", value_name = "AREA")]
    pub areas: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CONFDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Build the graph and print it, but don't write the HTML page.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
