//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Validate a Bitcoin block header's hash and proof of work.
///
/// The header record is read as JSON in the blockchain.info layout, either a
/// single block or a `{"blocks": [...]}` list whose first entry is checked.
#[derive(Parser, Debug, Clone)]
#[command(name = "blockcheck", version)]
pub struct Args {
    /// JSON file holding the header record; "-" or nothing reads stdin.
    pub input: Option<PathBuf>,

    /// Print the full report as JSON instead of the step-by-step output.
    #[arg(long)]
    pub json: bool,

    /// Log level, overridden by RUST_LOG when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
