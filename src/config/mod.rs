// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the MikroTik provider client
//!
//! Loads router connection settings from environment variables and JSON.

use serde::Deserialize;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const ROUTER_NAME: &str = "default";
    pub const ROUTEROS_USERNAME: &str = "admin";
    pub const ROUTEROS_PASSWORD: &str = "";
    pub const API_PORT: u16 = 8728;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const HOST: &str = "MIKROTIK_HOST";
    pub const USER: &str = "MIKROTIK_USER";
    pub const PASSWORD: &str = "MIKROTIK_PASSWORD";
    pub const ROUTERS: &str = "MIKROTIK_ROUTERS";

    pub const LEGACY_ADDRESS: &str = "ROUTEROS_ADDRESS";
    pub const LEGACY_USERNAME: &str = "ROUTEROS_USERNAME";
    pub const LEGACY_PASSWORD: &str = "ROUTEROS_PASSWORD";
}

/// Connection settings of a single MikroTik router
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    #[serde(default = "default_router_name")]
    pub name: String,
    pub address: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

fn default_router_name() -> String {
    defaults::ROUTER_NAME.to_string()
}

fn default_username() -> String {
    defaults::ROUTEROS_USERNAME.to_string()
}

/// Appends the default API port when `host` carries none
///
/// Bare IPv6 literals are bracketed first.
#[must_use]
pub fn with_default_port(host: &str) -> String {
    let host = host.trim();
    if host.starts_with('[') {
        if host.contains("]:") {
            return host.to_string();
        }
        return format!("{host}:{}", defaults::API_PORT);
    }
    match host.matches(':').count() {
        0 => format!("{host}:{}", defaults::API_PORT),
        1 => host.to_string(),
        _ => format!("[{host}]:{}", defaults::API_PORT),
    }
}

impl RouterConfig {
    /// Builds a router entry, filling in the default port
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        host: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: with_default_port(host),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validates router configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Router name cannot be empty".to_string());
        }

        if !self.address.contains(':') {
            return Err(format!(
                "Invalid address format '{}': expected 'host:port'",
                self.address
            ));
        }

        if self.username.trim().is_empty() {
            return Err(format!(
                "Username cannot be empty for router '{}'",
                self.name
            ));
        }

        Ok(())
    }
}

/// Application-wide configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub routers: Vec<RouterConfig>,
}

impl Config {
    /// Loads configuration from the process environment and `.env`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup
    ///
    /// Precedence: `MIKROTIK_ROUTERS` (JSON list), then `MIKROTIK_HOST`, then
    /// the legacy `ROUTEROS_ADDRESS`. Invalid entries are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let routers = if let Some(config_json) = lookup(env_vars::ROUTERS) {
            serde_json::from_str::<Vec<RouterConfig>>(&config_json)
                .map(|routers| {
                    routers
                        .into_iter()
                        .map(|router| RouterConfig {
                            address: with_default_port(&router.address),
                            ..router
                        })
                        .collect()
                })
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to parse {}: {}. Using empty list.", env_vars::ROUTERS, e);
                    vec![]
                })
        } else if let Some(host) = lookup(env_vars::HOST) {
            vec![RouterConfig::new(
                defaults::ROUTER_NAME,
                &host,
                lookup(env_vars::USER).unwrap_or_else(default_username),
                lookup(env_vars::PASSWORD)
                    .unwrap_or_else(|| defaults::ROUTEROS_PASSWORD.to_string()),
            )]
        } else if let Some(address) = lookup(env_vars::LEGACY_ADDRESS) {
            vec![RouterConfig::new(
                defaults::ROUTER_NAME,
                &address,
                lookup(env_vars::LEGACY_USERNAME).unwrap_or_else(default_username),
                lookup(env_vars::LEGACY_PASSWORD)
                    .unwrap_or_else(|| defaults::ROUTEROS_PASSWORD.to_string()),
            )]
        } else {
            tracing::warn!("No router configuration found");
            vec![]
        };

        let routers = routers
            .into_iter()
            .filter(|router| match router.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!("Invalid router configuration: {}", e);
                    tracing::warn!("Skipping invalid router: {}", router.name);
                    false
                }
            })
            .collect();

        Self { routers }
    }

    /// The first configured router
    ///
    /// # Errors
    ///
    /// `Config` when no valid router is configured.
    pub fn primary(&self) -> Result<&RouterConfig> {
        self.routers.first().ok_or_else(|| {
            AppError::Config(format!(
                "no router configured, set {} or {}",
                env_vars::HOST,
                env_vars::ROUTERS
            ))
        })
    }
}
