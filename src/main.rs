//! RunLog - Running log report
//!
//! Loads a runs payload and prints the home table, leaderboards, calendar
//! and training analytics.
//!
//! Usage:
//! ```bash
//! runlog runs.json
//! runlog --today 2024-03-01 --distance 3.1 runs.json
//! runlog --month 2024-02 --detail 12 runs.json
//! runlog --json runs.json
//! ```

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use runlog::calendar::CalendarMonth;
use runlog::leaderboard::build_leaderboard;
use runlog::metrics::analytics::AnalyticsSummary;
use runlog::metrics::pace::synthetic_splits;
use runlog::report;
use runlog::runs::{distance_options, filter_by_distance, sorted_by_date};
use runlog::storage::{config, load_runs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "runlog",
    version,
    about = "Running log report",
    long_about = "Print the home table, leaderboards, calendar and training load analytics for a runs payload"
)]
struct Args {
    /// Runs payload (JSON array of runs)
    runs: PathBuf,

    /// Config file override
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference date for the training load windows (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Only include runs of this distance
    #[arg(long)]
    distance: Option<f64>,

    /// Calendar month to show (YYYY-MM)
    #[arg(long)]
    month: Option<String>,

    /// Show the detail view of the run with this id
    #[arg(long)]
    detail: Option<i64>,

    /// Print the analytics summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting RunLog v{}", env!("CARGO_PKG_VERSION"));

    let app_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;

    let runs = load_runs(&args.runs, app_config.runs.distance_unit)
        .with_context(|| format!("failed to load runs from {}", args.runs.display()))?;

    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let selected = args.distance.or(app_config.runs.default_distance);
    let filtered = sorted_by_date(&filter_by_distance(&runs, selected));

    let calculator = app_config.analytics.calculator();
    let summary = AnalyticsSummary::compute(&filtered, today, &calculator);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let month = match &args.month {
        Some(text) => parse_month(text)?,
        None => CalendarMonth::containing(today),
    };

    let mut out = String::new();
    report::write_home_table(&mut out, &report::home_rows(&runs))?;
    out.push('\n');

    let distances: Vec<String> = distance_options(&runs).iter().map(|d| d.to_string()).collect();
    out.push_str(&format!("Distances: {}\n\n", distances.join(", ")));

    report::write_leaderboard(
        &mut out,
        &build_leaderboard(&runs, selected),
        selected,
        app_config.display.leaderboard_rows,
    )?;
    out.push('\n');

    report::write_calendar(&mut out, &month.grid(&runs, today))?;
    out.push('\n');

    report::write_summary(&mut out, &summary)?;

    if let Some(id) = args.detail {
        let Some(run) = runs.iter().find(|run| run.id == Some(id)) else {
            bail!("no run with id {}", id);
        };
        let splits = synthetic_splits(
            run.distance_miles(),
            run.duration_minutes(),
            app_config.display.split_segment_miles,
        );
        out.push('\n');
        report::write_run_detail(&mut out, run, &splits)?;
    }

    print!("{}", out);
    Ok(())
}

/// Parse a `YYYY-MM` month argument.
fn parse_month(text: &str) -> Result<CalendarMonth> {
    let (year, month) = text
        .split_once('-')
        .with_context(|| format!("month must be YYYY-MM, got {}", text))?;
    let year: i32 = year.parse().with_context(|| format!("invalid year in {}", text))?;
    let month: u32 = month.parse().with_context(|| format!("invalid month in {}", text))?;

    CalendarMonth::new(year, month).with_context(|| format!("month out of range: {}", text))
}
