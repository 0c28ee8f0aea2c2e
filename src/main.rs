// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::sync::Arc;

use mikrotik_provider::{Config, ConnectionPool, MikroTikClient, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let config = Config::from_env();
    tracing::info!(
        "Loaded configuration for {} router(s)",
        config.routers.len()
    );
    let router = config.primary()?.clone();
    tracing::info!("Using router '{}' at {}", router.name, router.address);

    let pool = Arc::new(ConnectionPool::new());
    let client = MikroTikClient::with_pool(router.clone(), Arc::clone(&pool));

    let sessions = client.list_bgp_sessions().await.map_err(|e| {
        tracing::error!("Failed to read BGP sessions from '{}': {}", router.name, e);
        e
    })?;
    let established = sessions.iter().filter(|s| s.established).count();
    tracing::info!(
        "{} BGP session(s), {} established",
        sessions.len(),
        established
    );

    let stats = pool.get_pool_stats().await;
    client
        .metrics()
        .update_pool_stats(stats.idle, stats.checked_out);

    let snapshot = serde_json::json!({
        "router": router.name,
        "pool": { "idle": stats.idle, "checked_out": stats.checked_out },
        "sessions": sessions,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    tracing::debug!("Metrics:\n{}", client.metrics().encode_metrics().await?);
    pool.cleanup().await;
    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
