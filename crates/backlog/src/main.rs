//! backlog: task-tracking maintenance daemon.
//!
//! Runs the background maintenance scheduler over the shared item store:
//! a collector loop that purges completed low-urgency items and a marker
//! loop that re-prioritizes unfinished items by due date.

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backlog_scheduler::{CollectorConfig, DEFAULT_SWEEP_INTERVAL_MS, MarkerConfig};

mod daemon;

/// Parse boolean from environment variable, accepting common truthy values.
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Accepts "0", "false", "no", "off", "" (case-insensitive) as false.
fn parse_bool_env(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(format!(
            "invalid boolean value '{}', expected 1/true/yes/on or 0/false/no/off",
            s
        )),
    }
}

#[derive(Parser)]
#[command(name = "backlog")]
#[command(about = "Task-tracking maintenance daemon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the maintenance daemon (collector + marker loops)
    Daemon {
        /// Start the collector loop
        #[arg(long, env = "BACKLOG_COLLECTOR_ENABLED", value_parser = parse_bool_env, default_value = "true")]
        collector_enabled: bool,

        /// Collector sweep interval in milliseconds
        #[arg(long, env = "BACKLOG_COLLECTOR_INTERVAL_MS", default_value_t = DEFAULT_SWEEP_INTERVAL_MS)]
        collector_interval_ms: u64,

        /// Completed items are removed only when their priority is greater
        /// than this threshold (1-5)
        #[arg(long, env = "BACKLOG_MIN_PRIORITY_THRESHOLD", default_value = "1")]
        min_priority_threshold: u8,

        /// Start the marker loop
        #[arg(long, env = "BACKLOG_MARKER_ENABLED", value_parser = parse_bool_env, default_value = "true")]
        marker_enabled: bool,

        /// Marker sweep interval in milliseconds
        #[arg(long, env = "BACKLOG_MARKER_INTERVAL_MS", default_value_t = DEFAULT_SWEEP_INTERVAL_MS)]
        marker_interval_ms: u64,

        /// Number of generated items to seed the store with at startup
        #[arg(long, env = "BACKLOG_SEED", default_value = "90")]
        seed: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "backlog=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Daemon {
            collector_enabled,
            collector_interval_ms,
            min_priority_threshold,
            marker_enabled,
            marker_interval_ms,
            seed,
        } => {
            let config = daemon::DaemonConfig {
                collector: CollectorConfig {
                    enabled: collector_enabled,
                    sweep_interval_ms: collector_interval_ms,
                    min_priority_threshold,
                },
                marker: MarkerConfig {
                    enabled: marker_enabled,
                    sweep_interval_ms: marker_interval_ms,
                },
                seed,
            };
            daemon::run(config).await
        }
    }
}
