//! Marker task: re-prioritizes unfinished items by due-date proximity.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use backlog_store::ItemStore;

use crate::{Clock, MaintenanceTask, SchedulerError, SweepStats};

/// Reclassifies the priority of unfinished items (`progress <= 99`) from how
/// their due date relates to "today":
///
/// - overdue → priority 1
/// - due today → priority 2
/// - due tomorrow → priority 3
/// - anything further out → left alone
///
/// Only date components are compared; "today" comes from the injected clock.
/// An item is written back only when its priority actually changes, so
/// repeated sweeps against a stationary clock converge after the first.
pub struct Marker {
    store: Arc<dyn ItemStore>,
    clock: Arc<dyn Clock>,
}

impl Marker {
    pub fn new(store: Arc<dyn ItemStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// The priority an unfinished item due on `due` should hold, or `None`
    /// when the schedule does not dictate one.
    fn target_priority(due: NaiveDate, today: NaiveDate) -> Option<u8> {
        let tomorrow = today.checked_add_days(Days::new(1))?;
        if due < today {
            Some(1)
        } else if due == today {
            Some(2)
        } else if due == tomorrow {
            Some(3)
        } else {
            None
        }
    }
}

#[async_trait]
impl MaintenanceTask for Marker {
    fn name(&self) -> &'static str {
        "marker"
    }

    async fn sweep(&self) -> Result<SweepStats, SchedulerError> {
        let today = self.clock.today();
        let items = self.store.list().await?;

        let mut stats = SweepStats::default();
        for item in items.iter().filter(|item| item.progress <= 99) {
            let Some(target) = Self::target_priority(item.due_date.date_naive(), today) else {
                continue;
            };
            if item.priority == target {
                continue;
            }

            stats.matched += 1;
            let mut marked = item.clone();
            marked.priority = target;
            match self.store.update(&marked).await {
                Ok(_) => {
                    stats.applied += 1;
                    debug!(
                        id = item.id,
                        from = item.priority,
                        to = target,
                        "re-prioritized item"
                    );
                }
                // Concurrently deleted or transient failure: skip, keep sweeping.
                Err(e) => {
                    stats.failed += 1;
                    warn!(id = item.id, error = %e, "failed to re-prioritize item, skipping");
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backlog_store::{Item, MemoryStore, NewItem, StoreError};
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use crate::FixedClock;

    fn june(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    fn clock_at_june_10() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(june(10)))
    }

    fn item(priority: u8, progress: u8, due: DateTime<Utc>) -> NewItem {
        NewItem {
            title: "task".to_string(),
            priority,
            progress,
            due_date: due,
        }
    }

    #[tokio::test]
    async fn marks_by_due_date_proximity() {
        let store = Arc::new(MemoryStore::new());
        let overdue = store.add(item(5, 50, june(9))).await.unwrap();
        let today = store.add(item(5, 0, june(10))).await.unwrap();
        let tomorrow = store.add(item(5, 10, june(11))).await.unwrap();
        let later = store.add(item(5, 5, june(20))).await.unwrap();

        let marker = Marker::new(store.clone(), clock_at_june_10());
        let stats = marker.sweep().await.unwrap();
        assert_eq!(stats.applied, 3);
        assert_eq!(stats.failed, 0);

        let priority = |id: u64| {
            let store = store.clone();
            async move { store.find(id).await.unwrap().unwrap().priority }
        };
        assert_eq!(priority(overdue.id).await, 1);
        assert_eq!(priority(today.id).await, 2);
        assert_eq!(priority(tomorrow.id).await, 3);
        assert_eq!(priority(later.id).await, 5);
    }

    #[tokio::test]
    async fn finished_items_are_left_alone() {
        let store = Arc::new(MemoryStore::new());
        let done = store.add(item(4, 100, june(1))).await.unwrap();

        let marker = Marker::new(store.clone(), clock_at_june_10());
        let stats = marker.sweep().await.unwrap();

        assert_eq!(stats, SweepStats::default());
        assert_eq!(store.find(done.id).await.unwrap().unwrap().priority, 4);
    }

    #[tokio::test]
    async fn second_sweep_with_fixed_clock_is_a_no_op() {
        let store = Arc::new(MemoryStore::new());
        store.add(item(5, 50, june(9))).await.unwrap();
        store.add(item(5, 0, june(10))).await.unwrap();
        let marker = Marker::new(store.clone(), clock_at_june_10());

        let first = marker.sweep().await.unwrap();
        assert_eq!(first.applied, 2);

        let before: Vec<Item> = store.list().await.unwrap();
        let second = marker.sweep().await.unwrap();
        assert_eq!(second, SweepStats::default());
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn only_priority_is_written_back() {
        let store = Arc::new(MemoryStore::new());
        let original = store.add(item(5, 42, june(9))).await.unwrap();

        Marker::new(store.clone(), clock_at_june_10())
            .sweep()
            .await
            .unwrap();

        let marked = store.find(original.id).await.unwrap().unwrap();
        assert_eq!(marked.priority, 1);
        assert_eq!(marked.title, original.title);
        assert_eq!(marked.progress, original.progress);
        assert_eq!(marked.due_date, original.due_date);
    }

    /// A store whose `update` fails for one designated id.
    struct UpdateFailsFor {
        inner: MemoryStore,
        poisoned: u64,
    }

    #[async_trait]
    impl ItemStore for UpdateFailsFor {
        async fn list(&self) -> Result<Vec<Item>, StoreError> {
            self.inner.list().await
        }
        async fn find(&self, id: u64) -> Result<Option<Item>, StoreError> {
            self.inner.find(id).await
        }
        async fn add(&self, item: NewItem) -> Result<Item, StoreError> {
            self.inner.add(item).await
        }
        async fn update(&self, item: &Item) -> Result<Item, StoreError> {
            if item.id == self.poisoned {
                return Err(StoreError::Backend("simulated failure".to_string()));
            }
            self.inner.update(item).await
        }
        async fn remove(&self, id: u64) -> Result<Item, StoreError> {
            self.inner.remove(id).await
        }
    }

    #[tokio::test]
    async fn one_failed_update_does_not_abort_the_sweep() {
        let inner = MemoryStore::new();
        let a = inner.add(item(5, 50, june(9))).await.unwrap();
        let b = inner.add(item(5, 50, june(9))).await.unwrap();
        let store = Arc::new(UpdateFailsFor {
            inner,
            poisoned: a.id,
        });

        let marker = Marker::new(store.clone(), clock_at_june_10());
        let stats = marker.sweep().await.unwrap();

        assert_eq!(stats.matched, 2);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(store.find(a.id).await.unwrap().unwrap().priority, 5);
        assert_eq!(store.find(b.id).await.unwrap().unwrap().priority, 1);
    }

    proptest! {
        // Any past due date maps to priority 1, regardless of distance.
        #[test]
        fn overdue_is_always_most_urgent(days_late in 1u64..3650) {
            let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
            let due = today.checked_sub_days(Days::new(days_late)).unwrap();
            prop_assert_eq!(Marker::target_priority(due, today), Some(1));
        }

        // Beyond tomorrow, the schedule dictates nothing.
        #[test]
        fn far_future_is_untouched(days_out in 2u64..3650) {
            let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
            let due = today.checked_add_days(Days::new(days_out)).unwrap();
            prop_assert_eq!(Marker::target_priority(due, today), None);
        }

        // The mapping is a function of (due, today) alone, so re-applying
        // it to an already-marked item picks the same target.
        #[test]
        fn target_is_stable(offset in -10i64..10) {
            let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
            let due = if offset < 0 {
                today.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
            } else {
                today.checked_add_days(Days::new(offset as u64)).unwrap()
            };

            let first = Marker::target_priority(due, today);
            prop_assert_eq!(Marker::target_priority(due, today), first);
        }
    }
}
