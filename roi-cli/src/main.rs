use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use roi_cli::display::{FieldRanges, write_report};
use roi_cli::logging::{enable_file_logging, init_logging, set_log_level};
use roi_cli::{OutputFormat, Simulator, SimulatorConfig, parse_assignment, repl};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Revenue and ROI simulator for a live-chat agency.
///
/// Starts from the default scenario (or the `[inputs]` table of a config
/// file), applies any `--set` overrides, and prints the projection.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override one input, e.g. `--set partner_sales=800`. Repeatable.
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level or filter directive; overrides `RUST_LOG` and the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// List input fields with their ranges and exit.
    #[arg(long)]
    fields: bool,

    /// Read `field=value` lines from stdin, recomputing after each one.
    #[arg(long, short = 'i')]
    interactive: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };

    init_logging(config.log_level.as_deref().unwrap_or("info"));
    if let Some(level) = &cli.log_level {
        set_log_level(level)?;
    }
    if let Some(path) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        enable_file_logging(path)?;
    }
    debug!(?cli, "parsed arguments");
    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "Loaded config");
    }

    if cli.fields {
        print!("{FieldRanges}");
        return Ok(());
    }

    let format = cli.format.or(config.format).unwrap_or_default();
    let mut sim = Simulator::new(config.engine(), config.inputs.clone())
        .context("scenario inputs are invalid")?;

    for raw in &cli.set {
        let assignment =
            parse_assignment(raw).with_context(|| format!("invalid --set '{raw}'"))?;
        sim.apply(assignment)
            .with_context(|| format!("cannot apply --set '{raw}'"))?;
    }
    info!(
        net_profit = %sim.report().result.monthly_net_profit,
        payback = ?sim.report().result.payback,
        "projection ready"
    );

    if cli.interactive {
        repl::run(&mut sim, io::stdin().lock(), io::stdout().lock(), format)?;
    } else {
        write_report(&mut io::stdout().lock(), sim.inputs(), sim.report(), format)?;
    }

    Ok(())
}
