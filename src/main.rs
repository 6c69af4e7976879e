// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FleetUp GPS collector daemon.
//!
//! Loads configuration, wires the API service and CSV store together and
//! runs the collection loop until externally terminated.

use anyhow::Context;
use fleetup_collector::{
    config::Config,
    db::CsvLogStore,
    scheduler::Collector,
    services::{FleetUpClient, FleetUpService},
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(&config.log_level);

    tracing::info!(
        interval_secs = config.collection_interval_secs,
        data_dir = %config.data_dir.display(),
        "Starting FleetUp GPS collector"
    );

    let store = CsvLogStore::new(&config.data_dir).context("Failed to create data directory")?;

    let client = FleetUpClient::new(
        config.base_url.clone(),
        config.account_id.clone(),
        config.secret_key.clone(),
        config.api_key.clone(),
    );

    let collector = Collector::new(FleetUpService::new(client), store);
    collector
        .run(Duration::from_secs(config.collection_interval_secs))
        .await;

    Ok(())
}

/// Initialize logging with the configured level, falling back to `info` for
/// unrecognized values.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_new(level.to_ascii_lowercase())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
