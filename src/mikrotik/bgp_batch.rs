// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Cached BGP lookups and batch connection operations

use std::sync::Arc;

use serde::Serialize;

use super::cache::ResourceCache;
use super::client::MikroTikClient;
use crate::error::Result;
use crate::resource::Resource;
use crate::resources::{BgpConnection, BgpInstanceV7, BgpSession, BgpTemplate};

/// Entry counts of the BGP caches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub instances_v7_count: usize,
    pub instances_v7_valid: bool,
    pub connections_count: usize,
    pub connections_valid: bool,
    pub templates_count: usize,
    pub templates_valid: bool,
    pub sessions_count: usize,
    pub sessions_valid: bool,
}

/// BGP reads through name-keyed caches, one per kind
///
/// Every cache is independent; `invalidate_cache` bumps all of them.
pub struct BgpBatchOperations {
    client: MikroTikClient,
    instances_v7: ResourceCache<BgpInstanceV7>,
    connections: ResourceCache<BgpConnection>,
    templates: ResourceCache<BgpTemplate>,
    sessions: ResourceCache<BgpSession>,
}

impl MikroTikClient {
    /// Creates a batch helper sharing this client's transport and metrics
    #[must_use]
    pub fn new_bgp_batch_operations(&self) -> BgpBatchOperations {
        BgpBatchOperations::new(self.clone())
    }
}

impl BgpBatchOperations {
    #[must_use]
    pub fn new(client: MikroTikClient) -> Self {
        let metrics = client.metrics().clone();
        Self {
            instances_v7: ResourceCache::new(BgpInstanceV7::KIND, metrics.clone()),
            connections: ResourceCache::new(BgpConnection::KIND, metrics.clone()),
            templates: ResourceCache::new(BgpTemplate::KIND, metrics.clone()),
            sessions: ResourceCache::new(BgpSession::KIND, metrics),
            client,
        }
    }

    /// # Errors
    ///
    /// Any error of the underlying find; failures are not cached.
    pub async fn get_or_fetch_instance_v7(&self, name: &str) -> Result<Arc<BgpInstanceV7>> {
        self.instances_v7
            .get_or_fetch(name, || self.client.find_bgp_instance_v7(name))
            .await
    }

    /// # Errors
    ///
    /// Any error of the underlying find; failures are not cached.
    pub async fn get_or_fetch_connection(&self, name: &str) -> Result<Arc<BgpConnection>> {
        self.connections
            .get_or_fetch(name, || self.client.find_bgp_connection(name))
            .await
    }

    /// # Errors
    ///
    /// Any error of the underlying find; failures are not cached.
    pub async fn get_or_fetch_template(&self, name: &str) -> Result<Arc<BgpTemplate>> {
        self.templates
            .get_or_fetch(name, || self.client.find_bgp_template(name))
            .await
    }

    /// # Errors
    ///
    /// Any error of the underlying find; failures are not cached.
    pub async fn get_or_fetch_session(&self, name: &str) -> Result<Arc<BgpSession>> {
        self.sessions
            .get_or_fetch(name, || self.client.find_bgp_session(name))
            .await
    }

    /// Makes every cached entry unreachable
    pub async fn invalidate_cache(&self) {
        self.instances_v7.invalidate().await;
        self.connections.invalidate().await;
        self.templates.invalidate().await;
        self.sessions.invalidate().await;
        tracing::debug!("BGP caches invalidated");
    }

    /// Adds each connection in order; one failure does not stop the rest
    pub async fn batch_add_connections(
        &self,
        connections: &[BgpConnection],
    ) -> Vec<Result<BgpConnection>> {
        let mut results = Vec::with_capacity(connections.len());
        for connection in connections {
            let result = self.client.add_bgp_connection(connection).await;
            self.remember_connection(&result).await;
            results.push(result);
        }
        log_batch("add", &results);
        results
    }

    /// Updates each connection in order; one failure does not stop the rest
    pub async fn batch_update_connections(
        &self,
        connections: &[BgpConnection],
    ) -> Vec<Result<BgpConnection>> {
        let mut results = Vec::with_capacity(connections.len());
        for connection in connections {
            let result = self.client.update_bgp_connection(connection).await;
            self.remember_connection(&result).await;
            results.push(result);
        }
        log_batch("update", &results);
        results
    }

    async fn remember_connection(&self, result: &Result<BgpConnection>) {
        if let Ok(connection) = result {
            self.connections
                .put(&connection.name, connection.clone())
                .await;
        }
    }

    /// Replaces the session cache with a fresh listing
    ///
    /// # Errors
    ///
    /// The list error, wrapped; the cache is left untouched in that case.
    pub async fn preload_all_sessions(&self) -> Result<()> {
        let sessions = self
            .client
            .list_bgp_sessions()
            .await
            .map_err(|e| e.context("failed to preload sessions"))?;

        let count = sessions.len();
        self.sessions
            .replace_all(
                sessions
                    .into_iter()
                    .map(|session| (session.name.clone(), session)),
            )
            .await;
        tracing::debug!("Preloaded {} BGP sessions", count);
        Ok(())
    }

    pub async fn cache_stats(&self) -> CacheStats {
        let (instances_v7_count, instances_v7_valid) = self.instances_v7.stats().await;
        let (connections_count, connections_valid) = self.connections.stats().await;
        let (templates_count, templates_valid) = self.templates.stats().await;
        let (sessions_count, sessions_valid) = self.sessions.stats().await;
        CacheStats {
            instances_v7_count,
            instances_v7_valid,
            connections_count,
            connections_valid,
            templates_count,
            templates_valid,
            sessions_count,
            sessions_valid,
        }
    }
}

fn log_batch(operation: &str, results: &[Result<BgpConnection>]) {
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!(
            "BGP connection batch {}: {} of {} failed",
            operation,
            failed,
            results.len()
        );
    } else {
        tracing::debug!("BGP connection batch {}: {} done", operation, results.len());
    }
}
