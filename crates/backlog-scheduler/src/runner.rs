//! Scheduler runtime: drives maintenance tasks on their own timers.

use std::sync::Arc;
use std::time::Duration;

use backlog_store::ItemStore;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    Clock, Collector, CollectorConfig, MaintenanceTask, Marker, MarkerConfig, SchedulerError,
};

/// Lifecycle state of a running maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Configured but not yet started.
    Created,
    /// Sweeping and waiting on its interval.
    Running,
    /// Cancellation observed; finishing the current step, no new sweeps.
    StopRequested,
    /// Terminal. The handle's `join` resolves once this is reached.
    Stopped,
}

/// Starts maintenance tasks as independent long-lived loops.
pub struct TaskRunner;

impl TaskRunner {
    /// Spawn `task`, sweeping every `interval` until stop is requested.
    ///
    /// The loop observes cancellation at two points: before starting a new
    /// sweep and while waiting out the interval. An in-flight sweep is never
    /// aborted mid-mutation; at worst the handle resolves one sweep plus one
    /// wait after [`TaskHandle::request_stop`].
    pub fn start(task: Arc<dyn MaintenanceTask>, interval: Duration) -> TaskHandle {
        let name = task.name();
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (state_tx, state_rx) = watch::channel(TaskState::Created);

        let join = tokio::spawn(async move {
            let _ = state_tx.send(TaskState::Running);
            info!(task = name, interval_ms = interval.as_millis() as u64, "maintenance task started");

            loop {
                if *shutdown_rx.borrow() {
                    let _ = state_tx.send(TaskState::StopRequested);
                    break;
                }

                match task.sweep().await {
                    Ok(stats) => debug!(
                        task = name,
                        matched = stats.matched,
                        applied = stats.applied,
                        failed = stats.failed,
                        "sweep complete"
                    ),
                    // Snapshot failed; this tick is abandoned, the next
                    // will retry after the normal interval.
                    Err(e) => warn!(task = name, error = %e, "sweep failed, retrying next tick"),
                }

                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        // A closed channel means the handle is gone; stop
                        // rather than spin.
                        if changed.is_err() || *shutdown_rx.borrow() {
                            let _ = state_tx.send(TaskState::StopRequested);
                            break;
                        }
                    }
                    _ = sleep(interval) => {}
                }
            }

            let _ = state_tx.send(TaskState::Stopped);
            info!(task = name, "maintenance task stopped");
        });

        TaskHandle {
            name,
            shutdown_tx,
            state_rx,
            join,
        }
    }
}

/// Lifecycle handle for one maintenance task.
///
/// Used by the hosting process for orderly shutdown and by tests to
/// synchronize on completion.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    state_rx: watch::Receiver<TaskState>,
    join: JoinHandle<()>,
}

impl TaskHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Signal cooperative cancellation. The task finishes its current
    /// sweep or wait and stops without starting a new sweep.
    pub fn request_stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// The task's current lifecycle state.
    pub fn state(&self) -> TaskState {
        *self.state_rx.borrow()
    }

    /// Wait for the task to stop. Consumes the handle; run-to-completion
    /// can be awaited exactly once.
    pub async fn join(self) {
        let _ = self.join.await;
    }
}

/// Validate both task configs and start every enabled task.
///
/// Disabled tasks get no scheduler entry at all. Validation failures are
/// fatal here, before any loop is spawned.
pub fn start_enabled_tasks(
    store: Arc<dyn ItemStore>,
    clock: Arc<dyn Clock>,
    collector: &CollectorConfig,
    marker: &MarkerConfig,
) -> Result<Vec<TaskHandle>, SchedulerError> {
    collector.validate()?;
    marker.validate()?;

    let mut handles = Vec::new();
    if collector.enabled {
        let task = Arc::new(Collector::new(Arc::clone(&store), collector));
        handles.push(TaskRunner::start(task, collector.sweep_interval()));
    }
    if marker.enabled {
        let task = Arc::new(Marker::new(store, clock));
        handles.push(TaskRunner::start(task, marker.sweep_interval()));
    }
    Ok(handles)
}
