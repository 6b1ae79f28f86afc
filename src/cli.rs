//! CLI argument parsing module for nun

use crate::error::ConfigError;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Interval used when `--interval` is given without a value (one hour)
pub const DEFAULT_INTERVAL_MS: u64 = 1000 * 60 * 60;

/// Parse a positive number of milliseconds
fn parse_interval(s: &str) -> Result<Duration, ConfigError> {
    match s.trim().parse::<u64>() {
        Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
        _ => Err(ConfigError::InvalidInterval {
            value: s.to_string(),
        }),
    }
}

/// npm update notifier
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nun",
    version,
    about = "Notifies about outdated dependencies in package.json files",
    after_help = "The interval value must be attached with '=': --interval=600000.\n\n\
                  Example:\n  nun ./package.json --interval=600000 --console"
)]
pub struct CliArgs {
    /// package.json files to check
    #[arg(value_name = "PACKAGE_FILE")]
    pub paths: Vec<PathBuf>,

    /// Keep checking, waiting this many milliseconds between cycles (default: one hour)
    #[arg(
        long,
        value_name = "MILLIS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "3600000",
        value_parser = parse_interval
    )]
    pub interval: Option<Duration>,

    /// Print outdated dependencies on the console instead of desktop notifications
    #[arg(long)]
    pub console: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Do not show progress while checking
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Positional arguments that look like an interval value given without `=`
    ///
    /// `--interval 5000` parses as a bare `--interval` followed by the path
    /// `5000`.
    pub fn stray_interval_values(&self) -> Vec<&Path> {
        if self.interval.is_none() {
            return Vec::new();
        }
        self.paths
            .iter()
            .map(PathBuf::as_path)
            .filter(|p| p.to_str().is_some_and(|s| s.parse::<u64>().is_ok()))
            .collect()
    }
}
