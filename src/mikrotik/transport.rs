// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Command execution seam between the dispatcher and a RouterOS session

use async_trait::async_trait;
use std::sync::Arc;

use super::pool::ConnectionPool;
use super::reply::Reply;
use crate::config::RouterConfig;
use crate::error::{AppError, Result};

/// Runs one RouterOS API command and returns its parsed reply
///
/// `words[0]` is the command path, the rest are `=key=value` attributes or
/// `?key=value` queries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn run(&self, words: &[String]) -> Result<Reply>;
}

/// Transport backed by the shared [`ConnectionPool`]
pub struct PoolTransport {
    config: RouterConfig,
    pool: Arc<ConnectionPool>,
}

impl PoolTransport {
    #[must_use]
    pub fn new(config: RouterConfig, pool: Arc<ConnectionPool>) -> Self {
        Self { config, pool }
    }
}

#[async_trait]
impl Transport for PoolTransport {
    async fn run(&self, words: &[String]) -> Result<Reply> {
        let mut conn = self
            .pool
            .get_connection(
                &self.config.address,
                &self.config.username,
                &self.config.password,
            )
            .await?;

        let result = conn.run(words).await;
        match &result {
            // A trap is a complete, well-formed reply; the session is still usable
            Ok(_) | Err(AppError::Trap { .. }) => {
                self.pool
                    .record_success(&self.config.address, &self.config.username)
                    .await;
                self.pool
                    .release_connection(&self.config.address, &self.config.username, conn)
                    .await;
            }
            Err(e) => {
                tracing::debug!(
                    "Dropping connection to router '{}' after error: {}",
                    self.config.name,
                    e
                );
                self.pool
                    .record_error(&self.config.address, &self.config.username)
                    .await;
                self.pool.forget_connection();
            }
        }
        result
    }
}
