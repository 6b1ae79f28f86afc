//! Check cycle driver
//!
//! One cycle checks every manifest concurrently. Each manifest is reported
//! through the notifier as soon as its own check settles, so a slow manifest
//! never delays a fast one. The cycle itself only completes once every
//! manifest has settled; in interval mode the next cycle is scheduled from
//! that point.

use crate::checker::check_manifest;
use crate::domain::CheckResult;
use crate::error::CheckError;
use crate::notify::Notifier;
use crate::progress::Progress;
use crate::registry::VersionOracle;
use crate::scheduler::ScheduledTask;
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

/// A manifest whose check failed in a cycle
#[derive(Debug)]
pub struct CycleFailure {
    pub path: PathBuf,
    pub error: CheckError,
}

/// Everything one cycle produced, in settlement order
#[derive(Debug, Default)]
pub struct CycleReport {
    pub results: Vec<CheckResult>,
    pub failures: Vec<CycleFailure>,
}

impl CycleReport {
    /// Total outdated dependencies across all checked manifests
    pub fn total_outdated(&self) -> usize {
        self.results.iter().map(|r| r.outdated.len()).sum()
    }
}

/// Drives check cycles over a fixed set of manifests
pub struct CycleDriver {
    manifests: Vec<PathBuf>,
    oracle: Arc<dyn VersionOracle>,
    notifier: Arc<dyn Notifier>,
    show_progress: bool,
}

impl CycleDriver {
    pub fn new(
        manifests: Vec<PathBuf>,
        oracle: Arc<dyn VersionOracle>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            manifests,
            oracle,
            notifier,
            show_progress: false,
        }
    }

    /// Enable the progress bar (builder pattern)
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run a single cycle over all manifests
    pub async fn run_once(&self) -> CycleReport {
        info!(
            "checking {} manifest(s) for npm updates",
            self.manifests.len()
        );

        let mut progress = Progress::new(self.show_progress);
        progress.start(self.manifests.len() as u64, "Checking for npm updates");

        let mut pending: FuturesUnordered<_> = self
            .manifests
            .iter()
            .map(|path| async move {
                let outcome = check_manifest(path, self.oracle.as_ref()).await;
                (path, outcome)
            })
            .collect();

        let mut report = CycleReport::default();
        while let Some((path, outcome)) = pending.next().await {
            progress.inc();
            match outcome {
                Ok(result) => {
                    debug!(
                        "{} ({}): {} outdated",
                        result.project,
                        path.display(),
                        result.outdated.len()
                    );
                    if let Err(e) = progress.suspend(|| self.notifier.notify(&result)) {
                        warn!("notification for {} failed: {e}", path.display());
                    }
                    report.results.push(result);
                }
                Err(e) => {
                    error!("check of {} failed: {e}", path.display());
                    report.failures.push(CycleFailure {
                        path: path.clone(),
                        error: e,
                    });
                }
            }
        }
        progress.finish_and_clear();

        report
    }

    /// Wrap cycles into a task repeating every `interval` after completion
    pub fn schedule(self: Arc<Self>, interval: Duration) -> ScheduledTask {
        ScheduledTask::new(interval, move || {
            let driver = Arc::clone(&self);
            async move {
                driver.run_once().await;
            }
        })
    }

    /// Run cycles until the process is stopped
    pub async fn run_forever(self: Arc<Self>, interval: Duration) -> Result<(), JoinError> {
        let handle = self.schedule(interval).start();
        handle.join().await.map(|_| ())
    }
}
