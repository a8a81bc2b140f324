use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roi_core::ProjectionEngine;
use roi_data::{RateScheduleLoader, run_scenarios, scenario_loader, write_series, write_summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compute projections for every scenario in a CSV file.
///
/// The scenario CSV must have a `name` column; any other input column
/// (`self_sales`, `rent_cost`, `recruitment_count`, ...) overrides the default
/// scenario for that row. The summary is written as CSV to stdout unless
/// `--output` is given.
#[derive(Parser, Debug)]
#[command(name = "roi-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing scenarios
    #[arg(short, long)]
    scenarios: PathBuf,

    /// Optional CSV file (min_sales,rate) replacing the standard rate tiers
    #[arg(short, long)]
    tiers: Option<PathBuf>,

    /// Write the summary CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the 24-month cumulative-profit series to this CSV file
    #[arg(long)]
    series: Option<PathBuf>,
}

/// Logs go to stderr so the CSV on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let engine = match &args.tiers {
        Some(path) => {
            info!("Loading rate tiers from: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open: {}", path.display()))?;
            let schedule = RateScheduleLoader::load(file)
                .with_context(|| format!("Failed to load rate tiers: {}", path.display()))?;
            ProjectionEngine::new(schedule)
        }
        None => ProjectionEngine::standard(),
    };

    info!("Loading scenarios from: {}", args.scenarios.display());
    let scenarios = scenario_loader::load_from_file(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios: {}", args.scenarios.display()))?;
    info!("Parsed {} scenarios from CSV", scenarios.len());

    let outcomes = run_scenarios(&engine, &scenarios).context("Failed to compute scenarios")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            let written = write_summary(file, &outcomes).context("Failed to write summary")?;
            info!("Wrote {} summary rows to {}", written, path.display());
        }
        None => {
            write_summary(io::stdout().lock(), &outcomes).context("Failed to write summary")?;
        }
    }

    if let Some(path) = &args.series {
        let file =
            File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
        let written = write_series(file, &outcomes).context("Failed to write series")?;
        info!("Wrote {} series rows to {}", written, path.display());
    }

    Ok(())
}
