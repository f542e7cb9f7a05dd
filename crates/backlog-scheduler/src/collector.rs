//! Collector task: purges completed low-urgency items.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use backlog_store::{Item, ItemStore};

use crate::{CollectorConfig, MaintenanceTask, SchedulerError, SweepStats};

/// Removes items that are effectively complete (`progress > 99`) and not
/// among the most urgent priorities (`priority > min_priority_threshold`).
///
/// The threshold gate is the documented contract. Note the orientation:
/// priority 1 is *most* urgent, so a numerically greater priority is less
/// urgent — with threshold 1, priority-1 items survive collection and
/// everything else completed is purged. Earlier revisions of this policy
/// dropped the gate entirely; if that ever comes back it needs a product
/// decision, not a silent flip of the comparison.
///
/// Removal is permanent (no soft delete, no audit trail) and per-item
/// failures are skipped, so the sweep as a whole is idempotent.
pub struct Collector {
    store: Arc<dyn ItemStore>,
    min_priority_threshold: u8,
}

impl Collector {
    pub fn new(store: Arc<dyn ItemStore>, config: &CollectorConfig) -> Self {
        Self {
            store,
            min_priority_threshold: config.min_priority_threshold,
        }
    }

    fn should_collect(item: &Item, threshold: u8) -> bool {
        item.progress > 99 && item.priority > threshold
    }
}

#[async_trait]
impl MaintenanceTask for Collector {
    fn name(&self) -> &'static str {
        "collector"
    }

    async fn sweep(&self) -> Result<SweepStats, SchedulerError> {
        let items = self.store.list().await?;

        let mut stats = SweepStats::default();
        for item in items
            .iter()
            .filter(|item| Self::should_collect(item, self.min_priority_threshold))
        {
            stats.matched += 1;
            match self.store.remove(item.id).await {
                Ok(removed) => {
                    stats.applied += 1;
                    debug!(id = removed.id, title = %removed.title, "collected item");
                }
                // Concurrently deleted or transient failure: skip, keep sweeping.
                Err(e) => {
                    stats.failed += 1;
                    warn!(id = item.id, error = %e, "failed to collect item, skipping");
                }
            }
        }

        Ok(stats)
    }
}
