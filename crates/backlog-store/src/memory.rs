//! In-memory item store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use crate::{Item, ItemStore, NewItem, StoreError};

/// Thread-safe in-memory store.
///
/// Each call takes the lock once, so single calls are atomic; there is
/// deliberately no versioning or compare-and-swap between calls. This mirrors
/// the isolation level the scheduler is specified against, so the races it
/// must tolerate are reproducible in tests.
pub struct MemoryStore {
    items: RwLock<HashMap<u64, Item>>,
    next_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of items currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn find(&self, id: u64) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = item.into_item(id);
        self.items.write().await.insert(id, item.clone());
        trace!(id, title = %item.title, "added item");
        Ok(item)
    }

    async fn update(&self, item: &Item) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        let saved = items
            .get_mut(&item.id)
            .ok_or(StoreError::NotFound(item.id))?;

        saved.title = item.title.clone();
        saved.priority = item.priority;
        saved.progress = item.progress;
        saved.due_date = item.due_date;
        Ok(saved.clone())
    }

    async fn remove(&self, id: u64) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        let removed = items.remove(&id).ok_or(StoreError::NotFound(id))?;
        trace!(id, "removed item");
        Ok(removed)
    }
}
