//! Per-task configuration, validated once at startup.

use std::time::Duration;

use crate::SchedulerError;

/// Default interval between sweeps, in milliseconds.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 5000;

/// Collector task tunables.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Whether the task is started at all. Not a runtime toggle.
    pub enabled: bool,
    /// Interval between sweeps, in milliseconds. Must be positive.
    pub sweep_interval_ms: u64,
    /// Completed items are only removed when their priority is strictly
    /// greater than this threshold. Must be in `[1, 5]`.
    pub min_priority_threshold: u8,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            min_priority_threshold: 1,
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.sweep_interval_ms == 0 {
            return Err(SchedulerError::InvalidConfig(
                "collector sweep interval must be positive".to_string(),
            ));
        }
        if !(1..=5).contains(&self.min_priority_threshold) {
            return Err(SchedulerError::InvalidConfig(format!(
                "min priority threshold must be between 1 and 5, got {}",
                self.min_priority_threshold
            )));
        }
        Ok(())
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

/// Marker task tunables.
#[derive(Debug, Clone)]
pub struct MarkerConfig {
    /// Whether the task is started at all. Not a runtime toggle.
    pub enabled: bool,
    /// Interval between sweeps, in milliseconds. Must be positive.
    pub sweep_interval_ms: u64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
        }
    }
}

impl MarkerConfig {
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.sweep_interval_ms == 0 {
            return Err(SchedulerError::InvalidConfig(
                "marker sweep interval must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}
