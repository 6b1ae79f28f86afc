//! Interval scheduling of repeated work
//!
//! A `ScheduledTask` runs its work, waits for the interval, and runs it again.
//! The wait starts when a run completes, so runs are spaced by
//! `interval + run duration`. A run in progress is never interrupted: a
//! cancel takes effect at the next wait. The same task can be started again
//! after it was cancelled.

use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};

type Work = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Work repeated on an interval
pub struct ScheduledTask {
    interval: Duration,
    work: Work,
}

impl ScheduledTask {
    pub fn new<F, Fut>(interval: Duration, work: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            interval,
            work: Arc::new(move || work().boxed()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the repeating loop; the first run starts immediately
    pub fn start(&self) -> TaskHandle {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let work = Arc::clone(&self.work);
        let interval = self.interval;

        let join = tokio::spawn(async move {
            let mut runs = 0u64;
            loop {
                work().await;
                runs += 1;

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            tracing::debug!("scheduled task stopped after {runs} run(s)");
            runs
        });

        TaskHandle {
            cancel: cancel_tx,
            join,
        }
    }
}

/// Handle to a started `ScheduledTask`
///
/// Dropping the handle cancels the task.
pub struct TaskHandle {
    cancel: watch::Sender<bool>,
    join: JoinHandle<u64>,
}

impl TaskHandle {
    /// Stop after the current run; no further run is scheduled
    pub fn cancel(&self) {
        // the loop may already be gone
        let _ = self.cancel.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the loop to stop; returns the number of completed runs
    pub async fn join(self) -> Result<u64, JoinError> {
        let TaskHandle { cancel, join } = self;
        let runs = join.await;
        drop(cancel);
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn recording_task(
        interval: Duration,
        run_time: Duration,
    ) -> (ScheduledTask, mpsc::UnboundedReceiver<Instant>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = ScheduledTask::new(interval, move || {
            let tx = tx.clone();
            async move {
                let started = Instant::now();
                tokio::time::sleep(run_time).await;
                let _ = tx.send(started);
            }
        });
        (task, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_measured_from_completion() {
        let (task, mut rx) = recording_task(Duration::from_millis(1000), Duration::from_millis(100));
        let handle = task.start();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        let third = rx.recv().await.unwrap();

        assert_eq!(second - first, Duration::from_millis(1100));
        assert_eq!(third - second, Duration::from_millis(1100));

        handle.cancel();
        assert_eq!(handle.join().await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_does_not_interrupt_running_work() {
        let finished = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&finished);
        let task = ScheduledTask::new(Duration::from_secs(60), move || {
            let counter = Arc::clone(&counter);
            async move {
                tokio::time::sleep(Duration::from_millis(500)).await;
                *counter.lock().unwrap() += 1;
            }
        });

        let handle = task.start();
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();

        assert_eq!(handle.join().await.unwrap(), 1);
        assert_eq!(*finished.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_cancel() {
        let (task, mut rx) = recording_task(Duration::from_secs(10), Duration::ZERO);

        let handle = task.start();
        rx.recv().await.unwrap();
        handle.cancel();
        handle.join().await.unwrap();

        let handle = task.start();
        rx.recv().await.unwrap();
        assert!(!handle.is_finished());
        handle.cancel();
        assert_eq!(handle.join().await.unwrap(), 1);
    }

    #[test]
    fn test_interval_accessor() {
        let task = ScheduledTask::new(Duration::from_millis(5000), || async {});
        assert_eq!(task.interval(), Duration::from_millis(5000));
    }
}
