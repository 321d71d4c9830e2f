// src/lib.rs

pub mod cli;
pub mod conference;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod render;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::conference::{load_conferences, AreaFilter};
use crate::config::{load_or_default, ConfigFile};
use crate::dag::{
    build_graph, level_layout, prompt_days_from_now, resolve_start_day, ConferenceGraph,
    PlacedNode, StartPoint,
};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::render::{render_html, write_html, Palette, RenderOptions};

/// High-level entry point used by `main.rs`.
///
/// Uses the real filesystem, today's local date, and stdin/stdout for the
/// start-day prompt.
pub fn run(args: CliArgs) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_with(&args, &RealFileSystem, today, &mut input, &mut output)?;
    Ok(())
}

/// Run the whole pipeline against explicit collaborators.
///
/// This wires together:
/// - config loading
/// - CSV loading and filtering
/// - start-day resolution (prompting on `input` when needed)
/// - graph construction and layout
/// - palette lookup and HTML rendering (skipped on `--dry-run`)
///
/// Returns the constructed graph.
pub fn run_with<R: BufRead, W: Write>(
    args: &CliArgs,
    fs: &dyn FileSystem,
    today: NaiveDate,
    input: &mut R,
    output: &mut W,
) -> Result<ConferenceGraph> {
    let cfg = load_or_default(fs, args.config.as_deref().map(Path::new))?;

    let input_path = resolve_path(args.input.as_deref(), &cfg.config.input);
    let conferences = load_conferences(fs, &input_path)?;
    info!(path = ?input_path, count = conferences.len(), "conferences loaded");

    let conferences = area_filter(args, &cfg).apply(conferences);
    debug!(count = conferences.len(), "conferences after filtering");

    let start = match (&args.from_conference, args.days) {
        (Some(name), _) => StartPoint::Conference(name.clone()),
        (None, Some(days)) => StartPoint::DaysFromNow(days),
        (None, None) => StartPoint::DaysFromNow(prompt_days_from_now(input, output)?),
    };
    let start_day = resolve_start_day(&start, today, &conferences)?;
    info!(?start, start_day, "resolved start day");

    let graph = build_graph(&conferences, start_day);
    let placed = level_layout(&graph, &cfg.layout)?;

    let palette = Palette::from_config(&cfg);
    palette.check_all(graph.conferences())?;

    if args.dry_run {
        print_dry_run(output, &graph, &placed)?;
        return Ok(graph);
    }

    let options = RenderOptions::from_layout(&cfg.layout);
    let html = render_html(&graph, &placed, &palette, &options)?;
    let output_path = resolve_path(args.output.as_deref(), &cfg.config.output);
    write_html(fs, &output_path, &html)?;

    Ok(graph)
}

fn resolve_path(cli: Option<&str>, configured: &str) -> PathBuf {
    PathBuf::from(cli.unwrap_or(configured))
}

/// `--area` replaces `[filter].areas`; `[filter].exclude` always applies.
fn area_filter(args: &CliArgs, cfg: &ConfigFile) -> AreaFilter {
    let areas = if args.areas.is_empty() {
        cfg.filter.areas.clone()
    } else {
        args.areas.clone()
    };
    AreaFilter::new(areas, cfg.filter.exclude.clone())
}

/// Dry-run output: start day, next conference, nodes by level, edges.
fn print_dry_run<W: Write>(
    out: &mut W,
    graph: &ConferenceGraph,
    placed: &[PlacedNode],
) -> Result<()> {
    writeln!(out, "confdag dry-run")?;
    writeln!(out, "  start_day = {}", graph.start_day())?;
    match graph.next_conference() {
        Some(next) => writeln!(out, "  next conference = {}", next.name())?,
        None => writeln!(out, "  next conference = (none)")?,
    }
    writeln!(out)?;

    writeln!(out, "conferences ({}):", graph.node_count())?;
    for p in placed {
        let c = &graph.node(p.index).conference;
        writeln!(
            out,
            "  - {} [level {}] area={} deadline={} ({}) notification={} ({})",
            c.name(),
            p.level,
            c.area(),
            c.submission_deadline_str(),
            c.submission_deadline(),
            c.notification_date_str(),
            c.notification_date()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "edges ({}):", graph.edge_count())?;
    for (from, to) in graph.edges() {
        writeln!(out, "  {from} -> {to}")?;
    }

    debug!("dry-run complete (nothing written)");
    Ok(())
}
