// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Client metrics registry

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::labels::{CacheLabels, CommandLabels};
use crate::error::{AppError, Result};
use crate::resource::Action;

/// Outcome label of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Ok,
    Trap,
    Error,
}

impl CommandOutcome {
    #[must_use]
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(AppError::Trap { .. }) => Self::Trap,
            Err(_) => Self::Error,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Trap => "trap",
            Self::Error => "error",
        }
    }
}

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    commands: Family<CommandLabels, Counter>,
    cache_lookups: Family<CacheLabels, Counter>,
    connection_pool_size: Gauge,
    connection_pool_active: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let commands = Family::<CommandLabels, Counter>::default();
        registry.register(
            "mikrotik_commands",
            "RouterOS commands issued by the client",
            commands.clone(),
        );
        let cache_lookups = Family::<CacheLabels, Counter>::default();
        registry.register(
            "mikrotik_cache_lookups",
            "BGP cache lookups by result",
            cache_lookups.clone(),
        );
        let connection_pool_size = Gauge::default();
        registry.register(
            "mikrotik_connection_pool_size",
            "Idle connections in pool",
            connection_pool_size.clone(),
        );
        let connection_pool_active = Gauge::default();
        registry.register(
            "mikrotik_connection_pool_active",
            "Connections currently checked out of the pool",
            connection_pool_active.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            commands,
            cache_lookups,
            connection_pool_size,
            connection_pool_active,
        }
    }

    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;
        Ok(buffer)
    }

    pub fn record_command(&self, kind: &str, action: Action, outcome: CommandOutcome) {
        self.commands
            .get_or_create(&CommandLabels {
                kind: kind.to_string(),
                action: action.to_string(),
                outcome: outcome.as_str().to_string(),
            })
            .inc();
    }

    pub fn record_cache_lookup(&self, kind: &str, hit: bool) {
        self.cache_lookups
            .get_or_create(&CacheLabels {
                kind: kind.to_string(),
                result: if hit { "hit" } else { "miss" }.to_string(),
            })
            .inc();
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn update_pool_stats(&self, idle: usize, active: usize) {
        self.connection_pool_size.set(idle as i64);
        self.connection_pool_active.set(active as i64);
    }

    /// Current value of a command counter
    #[must_use]
    pub fn commands_total(&self, kind: &str, action: Action, outcome: CommandOutcome) -> u64 {
        self.commands
            .get_or_create(&CommandLabels {
                kind: kind.to_string(),
                action: action.to_string(),
                outcome: outcome.as_str().to_string(),
            })
            .get()
    }

    /// Current value of a cache lookup counter
    #[must_use]
    pub fn cache_lookups_total(&self, kind: &str, hit: bool) -> u64 {
        self.cache_lookups
            .get_or_create(&CacheLabels {
                kind: kind.to_string(),
                result: if hit { "hit" } else { "miss" }.to_string(),
            })
            .get()
    }
}
