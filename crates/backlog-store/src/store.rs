//! The store capability trait.

use async_trait::async_trait;

use crate::{Item, NewItem, StoreError};

/// Capability contract over the shared item collection.
///
/// Implementations must make each individual call atomic, but no atomicity is
/// promised across calls: a snapshot from [`list`](ItemStore::list) may be
/// stale by the time a subsequent [`update`](ItemStore::update) lands, and
/// two writers updating the same item race last-write-wins. Consumers
/// (the maintenance tasks, the HTTP layer) are expected to tolerate this.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Return a point-in-time snapshot of every item.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Look up a single item by id.
    async fn find(&self, id: u64) -> Result<Option<Item>, StoreError>;

    /// Create an item, assigning it a fresh id. Returns the stored item.
    async fn add(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Apply field-level changes to the stored item matching `item.id`.
    ///
    /// Returns the canonical post-update state, or
    /// [`StoreError::NotFound`] if the id is unknown (e.g. the item was
    /// removed by a concurrent actor).
    async fn update(&self, item: &Item) -> Result<Item, StoreError>;

    /// Delete the item with the given id, returning its last state.
    ///
    /// Removing an id that no longer exists yields
    /// [`StoreError::NotFound`]; it must never panic, so that concurrent
    /// removals stay safe.
    async fn remove(&self, id: u64) -> Result<Item, StoreError>;
}
