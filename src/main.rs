//! Infux workload driver
//!
//! Hammers a single shared cache from several threads and prints a JSON
//! throughput report.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infux::{run_workload, Cache, Config};

/// Main entry point for the workload driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache
/// 4. Run the workload across the configured workers
/// 5. Print the report as JSON on stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "infux=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        workers = config.workers,
        ops_per_worker = config.ops_per_worker,
        key_space = config.key_space,
        value_size = config.value_size,
        read_percent = config.read_percent,
        seed = config.seed,
        "Configuration loaded"
    );

    let cache = Cache::new();
    let report = run_workload(&cache, &config)?;
    info!(
        "Workload finished: {} ops in {:.1} ms ({:.0} ops/sec), {} entries",
        report.ops.total(),
        report.elapsed_ms,
        report.ops_per_sec,
        report.final_len
    );

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}
