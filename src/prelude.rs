// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use mikrotik_provider::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, RouterConfig};
pub use crate::error::{AppError, Result, is_not_found};

// Resource contract
pub use crate::resource::{Action, Resource};

// Metrics types
pub use crate::metrics::MetricsRegistry;

// MikroTik client
pub use crate::mikrotik::{
    BgpBatchOperations, CacheStats, ConnectionPool, MikroTikClient, Reply, Transport,
};

// Resource types
pub use crate::resources::*;
