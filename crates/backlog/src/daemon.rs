//! Daemon wiring: store, maintenance loops, graceful shutdown.

use std::sync::Arc;

use miette::Result;
use tracing::{info, warn};

use backlog_scheduler::{CollectorConfig, MarkerConfig, SystemClock, start_enabled_tasks};
use backlog_store::{ItemStore, MemoryStore, generate};

/// Configuration for the daemon.
pub struct DaemonConfig {
    pub collector: CollectorConfig,
    pub marker: MarkerConfig,
    /// Number of generated items to seed at startup.
    pub seed: usize,
}

pub async fn run(config: DaemonConfig) -> Result<()> {
    let store = Arc::new(MemoryStore::new());

    if config.seed > 0 {
        let items = generate::seed_items(config.seed)
            .ok_or_else(|| miette::miette!("seed count {} exceeds the title pool", config.seed))?;
        for item in items {
            store
                .add(item)
                .await
                .map_err(|e| miette::miette!("failed to seed store: {}", e))?;
        }
        info!(count = config.seed, "seeded store");
    }

    // Config validation happens here, before any loop starts.
    let handles = start_enabled_tasks(
        Arc::clone(&store) as Arc<dyn ItemStore>,
        Arc::new(SystemClock),
        &config.collector,
        &config.marker,
    )
    .map_err(|e| miette::miette!("{}", e))?;

    if handles.is_empty() {
        warn!("no maintenance tasks enabled; daemon will idle until shutdown");
    } else {
        info!(tasks = handles.len(), "maintenance tasks started");
    }

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| miette::miette!("failed to listen for shutdown signal: {}", e))?;
    info!("received shutdown signal");

    for handle in &handles {
        info!(task = handle.name(), "stopping maintenance task");
        handle.request_stop();
    }
    for handle in handles {
        handle.join().await;
    }

    info!("daemon shut down gracefully");
    Ok(())
}
