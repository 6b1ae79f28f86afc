//! Runtime settings derived from the command line

use crate::cli::CliArgs;
use std::time::Duration;

/// Where check results are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    /// One line per outdated dependency on stdout
    Console,
    /// One desktop notification per manifest
    #[default]
    Desktop,
}

/// Settings for a run of the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Delay between cycles; `None` means a single cycle
    pub interval: Option<Duration>,
    /// Notification sink
    pub sink: SinkKind,
    /// Whether console output is colored
    pub color: bool,
    /// Whether a progress bar is drawn during a cycle
    pub show_progress: bool,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: None,
            sink: SinkKind::default(),
            color: true,
            show_progress: false,
            verbose: false,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        let sink = if args.console {
            SinkKind::Console
        } else {
            SinkKind::Desktop
        };

        Self {
            interval: args.interval,
            sink,
            color: !args.no_color,
            // progress only makes sense next to console output
            show_progress: sink == SinkKind::Console && !args.quiet,
            verbose: args.verbose,
        }
    }

    /// Log filter used when `NUN_LOG` is not set
    ///
    /// Interval mode keeps `info` so each cycle's start stays visible.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "warn,nun=debug"
        } else if self.interval.is_some() {
            "warn,nun=info"
        } else {
            "warn"
        }
    }
}
