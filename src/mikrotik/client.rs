// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! High-level MikroTik client
//!
//! The generic CRUD dispatcher. Every typed method on [`MikroTikClient`]
//! (`add_bgp_connection`, `find_vrf`, ...) funnels into one of
//! [`add`](MikroTikClient::add), [`find`](MikroTikClient::find),
//! [`update`](MikroTikClient::update), [`delete`](MikroTikClient::delete) or
//! [`list`](MikroTikClient::list).

use std::sync::Arc;

use super::pool::ConnectionPool;
use super::reply::Reply;
use super::transport::{PoolTransport, Transport};
use crate::codec::{marshal, unmarshal_all, unmarshal_first};
use crate::config::RouterConfig;
use crate::error::{AppError, Result};
use crate::metrics::{CommandOutcome, MetricsRegistry};
use crate::resource::{Action, Resource};

/// `MikroTik` `RouterOS` API client
///
/// Cheap to clone: clones share the transport and the metrics registry.
#[derive(Clone)]
pub struct MikroTikClient {
    transport: Arc<dyn Transport>,
    metrics: MetricsRegistry,
}

fn command_for<T: Resource>(action: Action) -> Result<&'static str> {
    T::action_to_command(action)
        .filter(|command| !command.is_empty())
        .ok_or(AppError::UnsupportedAction {
            kind: T::KIND,
            action,
        })
}

impl MikroTikClient {
    /// Creates a new `MikroTik` client with a shared connection pool
    #[must_use]
    pub fn with_pool(config: RouterConfig, pool: Arc<ConnectionPool>) -> Self {
        Self::with_transport(Arc::new(PoolTransport::new(config, pool)))
    }

    /// Creates a client on top of any [`Transport`]
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Replaces the metrics registry, e.g. to share one across clients
    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricsRegistry) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Runs raw command words, bypassing the resource layer
    ///
    /// # Errors
    ///
    /// Returns the transport error or the device trap.
    pub async fn run(&self, words: Vec<String>) -> Result<Reply> {
        tracing::trace!("Running command: {:?}", words);
        self.transport.run(&words).await
    }

    async fn execute(&self, kind: &'static str, action: Action, words: Vec<String>) -> Result<Reply> {
        tracing::debug!("{} {}: {}", action, kind, words.first().map_or("", String::as_str));
        let result = self.transport.run(&words).await;
        self.metrics
            .record_command(kind, action, CommandOutcome::of(&result));
        if let Err(e) = &result {
            tracing::debug!("{} {} failed: {}", action, kind, e);
        }
        result
    }

    /// Creates the resource and returns it as the device reports it
    ///
    /// # Errors
    ///
    /// `UnsupportedAction` when the menu has no add command, otherwise any
    /// transport, trap, decode or not-found error from the add or the read-back.
    pub async fn add<T: Resource>(&self, resource: &T) -> Result<T> {
        let command = command_for::<T>(Action::Add)?;
        let reply = self
            .execute(T::KIND, Action::Add, marshal(command, resource))
            .await?;

        let mut created = resource.clone();
        created.after_add_hook(&reply);
        tracing::debug!("Added {} with id '{}'", T::KIND, created.id());

        self.find(&created).await
    }

    /// Finds the first entry whose find field matches the resource's value
    ///
    /// Singleton menus are printed without a filter.
    ///
    /// # Errors
    ///
    /// `NotFound` when the print returns no records.
    pub async fn find<T: Resource>(&self, resource: &T) -> Result<T> {
        if !T::SINGLETON {
            return self
                .find_by::<T>(resource.find_field(), resource.find_field_value())
                .await;
        }

        let command = command_for::<T>(Action::Find)?;
        let reply = self
            .execute(T::KIND, Action::Find, vec![command.to_string()])
            .await?;
        unmarshal_first::<T>(&reply)?.ok_or_else(|| AppError::NotFound(T::KIND.to_string()))
    }

    /// Finds the first entry whose `field` equals `value`
    ///
    /// # Errors
    ///
    /// `NotFound` when the print returns no records.
    pub async fn find_by<T: Resource>(&self, field: &str, value: &str) -> Result<T> {
        let command = command_for::<T>(Action::Find)?;
        let words = vec![command.to_string(), format!("?{field}={value}")];

        let reply = self.execute(T::KIND, Action::Find, words).await?;
        unmarshal_first::<T>(&reply)?
            .ok_or_else(|| AppError::NotFound(format!("{} with {field}='{value}'", T::KIND)))
    }

    /// Applies the resource's writable fields to the existing entry
    ///
    /// The entry is read back by its find field, or by id when that is empty.
    ///
    /// # Errors
    ///
    /// `MissingId` when a non-singleton resource carries no identifier.
    pub async fn update<T: Resource>(&self, resource: &T) -> Result<T> {
        let command = command_for::<T>(Action::Update)?;
        let mut words = marshal(command, resource);

        if !T::SINGLETON {
            if resource.id().is_empty() {
                return Err(AppError::MissingId { kind: T::KIND });
            }
            let id_prefix = format!("={}=", resource.id_field());
            if !words.iter().any(|w| w.starts_with(&id_prefix)) {
                words.insert(1, format!("{id_prefix}{}", resource.id()));
            }
        }

        self.execute(T::KIND, Action::Update, words).await?;

        // A partial update may carry only the id
        if !T::SINGLETON && resource.find_field_value().is_empty() {
            return self.find_by::<T>(resource.id_field(), resource.id()).await;
        }
        self.find(resource).await
    }

    /// Removes the entry addressed by the resource's delete field
    ///
    /// When that field is empty the entry is looked up first.
    ///
    /// # Errors
    ///
    /// `NotFound` from the lookup, `MissingId` if the device entry still has
    /// no delete value, or the transport/trap error of the remove.
    pub async fn delete<T: Resource>(&self, resource: &T) -> Result<()> {
        let command = command_for::<T>(Action::Delete)?;

        let (field, value) = if resource.delete_field_value().is_empty() {
            let found = self.find(resource).await?;
            (found.delete_field(), found.delete_field_value().to_string())
        } else {
            (
                resource.delete_field(),
                resource.delete_field_value().to_string(),
            )
        };
        if value.is_empty() {
            return Err(AppError::MissingId { kind: T::KIND });
        }

        self.execute(
            T::KIND,
            Action::Delete,
            vec![command.to_string(), format!("={field}={value}")],
        )
        .await?;
        Ok(())
    }

    /// Every entry of the menu
    ///
    /// # Errors
    ///
    /// `UnsupportedAction` when the menu cannot be printed, or any transport,
    /// trap or decode error.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>> {
        let command = command_for::<T>(Action::Find)?;
        let reply = self
            .execute(T::KIND, Action::Find, vec![command.to_string()])
            .await?;
        unmarshal_all(&reply)
    }
}
