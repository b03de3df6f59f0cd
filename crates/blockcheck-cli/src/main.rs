//! `blockcheck`: verify a Bitcoin block header against its published hash
//! and its proof-of-work target.
//!
//! Exit codes: 0 when both proofs hold, 1 when either fails, 2 when the
//! input cannot be read or a header field is malformed.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use blockcheck_core::{validate_header, HeaderReport};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod cli;
mod input;
mod output;

use cli::Args;

const EXIT_INVALID: u8 = 1;
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = init_tracing(&args) {
        eprintln!("Failed to initialize logging: {:#}", err);
    }

    let outcome = run(&args);
    if let Err(err) = &outcome {
        eprintln!("Error: {:#}", err);
    }

    ExitCode::from(exit_code(&outcome))
}

/// Map the outcome of a run to the process exit status.
fn exit_code(outcome: &Result<HeaderReport>) -> u8 {
    match outcome {
        Ok(report) if report.is_valid() => 0,
        Ok(_) => EXIT_INVALID,
        Err(_) => EXIT_INPUT_ERROR,
    }
}

fn run(args: &Args) -> Result<HeaderReport> {
    let fields = input::read_record(args.input_path().map(PathBuf::as_path))?;
    info!(hash = %fields.published_hash, "validating block header");

    let report = validate_header(&fields)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::Walkthrough(&report));
    }

    if report.is_valid() {
        info!(hash = %report.display_hash, "block header is valid");
    } else {
        warn!(
            hash = %report.display_hash,
            hash_matches = report.result.hash_matches,
            below_target = report.result.below_target,
            "block header failed verification"
        );
    }

    Ok(report)
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = LevelFilter::from_level(args.log_level.into());

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let use_ansi = std::io::stderr().is_terminal() && !args.no_color;

    Registry::default()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(use_ansi),
        )
        .try_init()?;

    Ok(())
}
