//! # CLI Module
//!
//! Argument parsing, logging setup and the report command.
//!
//! A bare `appa` prints the four plain-text lines and nothing else on stdout.
//! Every flag is optional and defaults to that behaviour.

use appa_core::{Ambient, DEFAULT_TAG, Report, ReportError, SystemAmbient};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "appa",
    version,
    about = "Print timestamp, host, user, day-of-year and DEMO_TOKEN presence"
)]
pub struct Cli {
    /// Output one machine-readable JSON object instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Tag printed in brackets at the start of every line.
    #[arg(long, env = "APPA_TAG", default_value = DEFAULT_TAG)]
    pub tag: String,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Gather one report from `ambient` and write it to `out`.
pub fn cmd_report(
    ambient: &impl Ambient,
    tag: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let report = Report::gather(ambient)?;

    if json {
        let body = serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: report.record(tag),
        })?;
        writeln!(out, "{}", body)?;
    } else {
        out.write_all(report.to_text(tag).as_bytes())?;
    }
    out.flush()?;

    info!(json, "report written");
    Ok(())
}

/// Run the report against the real system, writing to stdout.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    cmd_report(&SystemAmbient::new(), &cli.tag, cli.json, &mut handle)
}

/// Install the stderr subscriber.
///
/// Level comes from `RUST_LOG`, defaulting to `warn`, so a normal run keeps
/// stderr quiet and stdout carries only the report.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

// =============================================================================
// TESTS
// =============================================================================
