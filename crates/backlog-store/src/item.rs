//! The item entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked task item.
///
/// The maintenance scheduler only ever writes `priority` (Marker) or removes
/// the item outright (Collector); every other field is owned by the callers
/// that create and edit items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation.
    pub id: u64,
    /// Descriptive text, not interpreted by the scheduler.
    pub title: String,
    /// Urgency in `[1, 5]`; 1 is most urgent.
    pub priority: u8,
    /// Completion in `[0, 100]`; 100 means done.
    pub progress: u8,
    /// When the item is due. Only the date component matters for
    /// priority marking.
    pub due_date: DateTime<Utc>,
}

/// An item as submitted for creation, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub priority: u8,
    pub progress: u8,
    pub due_date: DateTime<Utc>,
}

impl NewItem {
    /// Attach a store-assigned id.
    pub fn into_item(self, id: u64) -> Item {
        Item {
            id,
            title: self.title,
            priority: self.priority,
            progress: self.progress,
            due_date: self.due_date,
        }
    }
}
