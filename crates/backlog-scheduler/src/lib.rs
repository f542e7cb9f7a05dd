//! Background maintenance scheduler for backlog.
//!
//! Two periodic reconciliation loops over the shared item store:
//! - [`Collector`] purges completed low-urgency items
//! - [`Marker`] re-prioritizes unfinished items by due-date proximity
//!
//! Each enabled task runs as an independent tokio task driven by
//! [`TaskRunner`], with cooperative cancellation through its [`TaskHandle`].
//! The loops coordinate with nothing: they tolerate last-write-wins races
//! with the HTTP layer and with each other, relying only on the store's
//! per-call atomicity.

mod clock;
mod collector;
mod config;
mod error;
mod marker;
mod runner;
mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collector::Collector;
pub use config::{CollectorConfig, DEFAULT_SWEEP_INTERVAL_MS, MarkerConfig};
pub use error::SchedulerError;
pub use marker::Marker;
pub use runner::{TaskHandle, TaskRunner, TaskState, start_enabled_tasks};
pub use task::{MaintenanceTask, SweepStats};
