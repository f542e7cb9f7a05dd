//! The unit of periodic work.

use async_trait::async_trait;

use crate::SchedulerError;

/// Outcome of a single sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    /// Items the task's policy selected for mutation.
    pub matched: usize,
    /// Mutations that were applied through the store.
    pub applied: usize,
    /// Per-item store calls that failed and were skipped.
    pub failed: usize,
}

/// A self-contained reconciliation step, run repeatedly by [`TaskRunner`].
///
/// A sweep reads a fresh snapshot, computes the required mutations, and
/// applies them through the store. Implementations must be idempotent:
/// re-running a sweep against an unchanged collection and clock must be a
/// no-op. A per-item failure is recorded in the stats and must not abort the
/// sweep; only a failure to obtain the snapshot aborts it.
///
/// [`TaskRunner`]: crate::TaskRunner
#[async_trait]
pub trait MaintenanceTask: Send + Sync + 'static {
    /// Stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Run one sweep to completion.
    async fn sweep(&self) -> Result<SweepStats, SchedulerError>;
}
