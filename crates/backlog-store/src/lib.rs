//! Item data model and store capability for backlog.
//!
//! This crate defines the `Item` entity, the [`ItemStore`] capability trait
//! consumed by the maintenance scheduler and the HTTP layer, and an in-memory
//! store implementation. The store guarantees atomicity per call only; there
//! is no cross-call isolation, and concurrent writers race last-write-wins.

mod error;
pub mod generate;
mod item;
mod memory;
mod store;

pub use error::StoreError;
pub use item::{Item, NewItem};
pub use memory::MemoryStore;
pub use store::ItemStore;
