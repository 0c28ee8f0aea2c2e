// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # MikroTik Provider
//!
//! Client core of a Terraform provider for MikroTik RouterOS devices.
//!
//! RouterOS configuration objects are modelled as typed structs with a
//! declarative wire-field table. A generic dispatcher turns them into
//! RouterOS API commands and maps replies back into fresh values.
//!
//! ## Main modules
//! - `codec`: typed values to and from API sentences
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: command and cache counters
//! - `mikrotik`: RouterOS API session, dispatcher and BGP cache
//! - `resource`: the `Resource` contract and `Action` verbs
//! - `resources`: every supported RouterOS object
//! - `prelude`: commonly used types and traits

mod codec;
mod config;
mod error;
mod metrics;
mod mikrotik;
mod resource;
pub mod prelude;
pub mod resources;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, RouterConfig, with_default_port};

/// Application error and result type
pub use error::{AppError, Result, is_not_found};

/// Wire codec
pub use codec::{
    BoolFormat, FieldSpec, WireFields, WireValue, marshal, unmarshal, unmarshal_all,
    unmarshal_first,
};

/// Resource contract
pub use resource::{Action, Resource};

/// Command and cache metrics
pub use metrics::{CacheLabels, CommandLabels, CommandOutcome, MetricsRegistry};

/// RouterOS client, transport seam and BGP cache
pub use mikrotik::{
    BgpBatchOperations, CacheStats, ConnectionPool, MikroTikClient, PoolStats, PoolTransport,
    Reply, Sentence, Transport,
};

/// RouterOS wire protocol framing (public for tests)
pub use mikrotik::{encode_length, read_reply, write_sentence};
