//! solargrid — batch pricing and ray tracing over a partitioned world grid.
//!
//! Two subcommands, both pure batch: read a scenario file, compute, write
//! the result file.  `price` also optionally emits the CSV map report
//! (capitals and borders of the capital graph) for inspection.
//!
//! Log verbosity is controlled via `RUST_LOG` (e.g. `RUST_LOG=sg_pricing=debug`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sg_io::{
    MapReportWriter, read_rays_file, read_scenario_file, write_costs_file, write_traces_file,
};
use sg_pricing::price_panels;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "solargrid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price every panel against every country's capital.
    Price {
        /// Scenario input file.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (defaults to `<input>.out`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for the CSV map report (capitals.csv, borders.csv).
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },
    /// Trace rays across the grid and list the cells each one crosses.
    Trace {
        /// Ray scenario input file.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (defaults to `<input>.out`).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// `<input>.out` beside the input file, unless overridden.
fn output_path(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| {
        let mut path = input.as_os_str().to_owned();
        path.push(".out");
        PathBuf::from(path)
    })
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_price(input: &Path, output: &Path, report_dir: Option<&Path>) -> Result<()> {
    let scenario = read_scenario_file(input)
        .with_context(|| format!("reading scenario {}", input.display()))?;
    info!(
        rows = scenario.grid.rows(),
        cols = scenario.grid.cols(),
        countries = scenario.grid.country_count(),
        panels = scenario.panels.len(),
        "scenario loaded"
    );

    let t0 = Instant::now();
    let run = price_panels(&scenario.grid, &scenario.panels)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "pricing pass done");

    write_costs_file(output, &run.costs)
        .with_context(|| format!("writing costs to {}", output.display()))?;

    if let Some(dir) = report_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating report dir {}", dir.display()))?;
        let mut report = MapReportWriter::new(dir)?;
        report.write_graph(&run.graph)?;
        report.finish()?;
        info!(dir = %dir.display(), "map report written");
    }

    Ok(())
}

fn run_trace(input: &Path, output: &Path) -> Result<()> {
    let scenario =
        read_rays_file(input).with_context(|| format!("reading rays {}", input.display()))?;
    info!(rays = scenario.rays.len(), "ray scenario loaded");

    let traces: Vec<_> = scenario
        .rays
        .iter()
        .map(|ray| ray.cells(scenario.max_x, scenario.max_y))
        .collect();

    write_traces_file(output, &traces)
        .with_context(|| format!("writing traces to {}", output.display()))?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Price { input, output, report_dir } => {
            let output = output_path(&input, output);
            run_price(&input, &output, report_dir.as_deref())
        }
        Command::Trace { input, output } => {
            let output = output_path(&input, output);
            run_trace(&input, &output)
        }
    }
}
