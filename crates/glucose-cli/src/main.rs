// File: crates/glucose-cli/src/main.rs
// Summary: Report binary; gathers readings, runs the numeric core, writes the text report.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use glucose_cli::input::load_readings_csv;
use glucose_cli::prompt::Prompter;
use glucose_core::{render, Analysis, ReportOptions};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Glucose gap filling, risk and danger-time report", long_about = None)]
struct Args {
    /// CSV with time and glucose columns (prompts on stdin when omitted)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Time (hours) to estimate glucose at; prompted when omitted
    #[arg(short, long)]
    query: Option<f64>,

    /// Danger glucose level for the crossing estimate; prompted when omitted
    #[arg(short, long)]
    danger: Option<f64>,

    /// Report output path
    #[arg(short, long, default_value = "report.txt", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Also print the report to stdout
    #[arg(long, action = ArgAction::SetTrue)]
    stdout: bool,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let raw = match &args.input {
        Some(path) => {
            let rows = load_readings_csv(path)
                .with_context(|| format!("failed to load readings from '{}'", path.display()))?;
            info!(path = %path.display(), rows = rows.len(), "loaded readings");
            rows
        }
        None => prompter.readings()?,
    };

    let query = match args.query {
        Some(q) => q,
        None => prompter.ask_f64("Enter time for interpolation (e.g. 10.5): ")?,
    };
    let danger = match args.danger {
        Some(d) => d,
        None => prompter.ask_f64("Enter danger glucose level (e.g. 12): ")?,
    };

    let analysis = Analysis::run(&raw, query, danger).context("cannot analyse readings")?;
    log_outcome(&analysis);

    let opts = ReportOptions { generated_at: Some(chrono::Local::now().naive_local()) };
    let text = render(&analysis, &opts);
    std::fs::write(&args.output, &text)
        .with_context(|| format!("writing report to {}", args.output.display()))?;
    if args.stdout {
        print!("{text}");
    }
    info!(path = %args.output.display(), "report generated");
    Ok(())
}

fn log_outcome(analysis: &Analysis) {
    match analysis.resolution.method() {
        Some(method) => info!(
            missing = analysis.series.missing().len(),
            %method,
            "reconstructing missing readings"
        ),
        None => info!("no missing readings"),
    }
    for slot in analysis.resolution.unresolved() {
        if let Err(e) = &slot.outcome {
            warn!(index = slot.index, error = %e, "reading left unresolved");
        }
    }
    for row in analysis.readings() {
        debug!(index = row.index, time = row.time, glucose = ?row.glucose, risk = ?row.risk, "reading");
    }
    match &analysis.interpolation {
        Ok(r) => info!(time = r.time, glucose = r.glucose, risk = %r.risk, "interpolated"),
        Err(e) => warn!(error = %e, "interpolation unavailable"),
    }
    match &analysis.crossing {
        Ok(c) => info!(time = c.time, rate = c.rate, "danger crossing estimated"),
        Err(e) => warn!(error = %e, "danger crossing unavailable"),
    }
}
