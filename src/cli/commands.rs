use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::aggregate::{count_by_level, filter_by_level, normalize_level};
use crate::error::LoadError;
use crate::logging::init_tracing;
use crate::parsers::load_logs;
use crate::report::{render_counts, render_details, render_json};

#[derive(Parser)]
#[command(name = "log-level-analyzer")]
#[command(version = "0.1.0")]
#[command(about = "Count log records per level and list the records of one level", long_about = None)]
pub struct Cli {
    /// Path to the log file to analyze
    pub file: PathBuf,

    /// Level whose records should be listed (case-insensitive, e.g. error)
    pub level: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "LOG_ANALYZER_FORMAT")]
    pub format: OutputFormat,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON document
    Json,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // File-level failures are reported on the same stream as the results
            match e.downcast_ref::<LoadError>() {
                Some(load_error) if load_error.is_file_error() => {
                    let _ = writeln!(out, "Error: {}", load_error);
                }
                _ => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Load, aggregate and report one log file
///
/// In table mode malformed-line diagnostics are interleaved with the report on `out`.
/// In JSON mode they go to stderr so `out` stays a single JSON document.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let store = match cli.format {
        OutputFormat::Table => load_logs(&cli.file, out)?,
        OutputFormat::Json => load_logs(&cli.file, &mut io::stderr().lock())?,
    };

    let counts = count_by_level(&store);
    let level = cli.level.as_deref().map(normalize_level);
    let details = level.as_deref().map(|level| (level, filter_by_level(&store, level)));

    let rendered = match cli.format {
        OutputFormat::Table => {
            let mut text = render_counts(&counts);
            if let Some((level, records)) = &details {
                text.push_str(&render_details(records, level));
            }
            text
        }
        OutputFormat::Json => render_json(
            &counts,
            details.as_ref().map(|(level, records)| (*level, records.as_slice())),
        )?,
    };

    out.write_all(rendered.as_bytes()).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}
