//! Command-line front end.
//!
//! Compares either one pair given on the command line or every pair listed
//! in a YAML config file. Each failed comparison writes a report file; the
//! process exits with status 1 when any pair is not equivalent.
//!
//! Usage:
//!   doccmp generated.txt reference.txt
//!   doccmp --config doccmp.yaml --json

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use doccmp::DoccmpConfig;
use doccmp::runner::{PairOutcome, ReportTarget, run_pairs, select_pairs};

#[derive(Parser)]
#[command(name = "doccmp", version)]
#[command(about = "Compare two extracted documents and report their differences")]
struct Args {
    /// Generated document (first input)
    #[arg(requires = "reference")]
    generated: Option<PathBuf>,

    /// Reference document (second input)
    reference: Option<PathBuf>,

    /// YAML config file with stage settings and named pairs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Similarity a pair must exceed to pass
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Maximum characters per report body line
    #[arg(long)]
    line_width: Option<usize>,

    /// Directory for failure reports
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Exact report path; only valid for a single pair
    #[arg(short, long, conflicts_with = "config", requires = "generated")]
    output: Option<PathBuf>,

    /// Print a JSON summary instead of plain lines
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args);

    let mut file_config = match &args.config {
        Some(path) => DoccmpConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DoccmpConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        file_config.threshold = threshold;
    }
    if let Some(width) = args.line_width {
        file_config.report.line_width = width;
    }

    let cfg = file_config.compare_config();
    cfg.validate().context("invalid comparison settings")?;

    let explicit = args.generated.clone().zip(args.reference.clone());
    let pairs = select_pairs(explicit, &file_config)?;
    let target = match &args.output {
        Some(path) => ReportTarget::File(path.clone()),
        None => ReportTarget::Directory(
            args.output_dir
                .clone()
                .unwrap_or_else(|| file_config.output_dir.clone()),
        ),
    };

    let summary = run_pairs(&pairs, &cfg, &target)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.outcomes)?);
    } else {
        for outcome in &summary.outcomes {
            print_outcome(outcome);
        }
        println!(
            "{} of {} pairs equivalent",
            summary.passed(),
            summary.outcomes.len()
        );
    }

    if summary.all_equivalent() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match args.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn print_outcome(outcome: &PairOutcome) {
    let verdict = if outcome.is_equivalent { "PASS" } else { "FAIL" };
    match &outcome.report_path {
        Some(path) => println!(
            "{verdict} {} (similarity {:.2}%) report: {}",
            outcome.name,
            outcome.similarity_percentage,
            path.display()
        ),
        None => println!(
            "{verdict} {} (similarity {:.2}%)",
            outcome.name, outcome.similarity_percentage
        ),
    }
}
