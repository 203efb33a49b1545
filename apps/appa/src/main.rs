//! AppA entry point.

use appa::cli::{Cli, init_tracing, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Priority: RUST_LOG env var > default (warn)
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "report failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
