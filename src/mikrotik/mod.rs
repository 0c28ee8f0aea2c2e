// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! `MikroTik` `RouterOS` API client module
//!
//! This module provides the RouterOS API session (framing, login, pooling),
//! the generic CRUD dispatcher and the cached BGP helpers built on top of it.

mod bgp_batch;
mod cache;
mod client;
mod connection;
mod pool;
mod reply;
mod transport;

// Re-export public types and functions
pub use bgp_batch::{BgpBatchOperations, CacheStats};
pub use client::MikroTikClient;
pub use connection::{encode_length, read_reply, write_sentence};
pub use pool::{ConnectionPool, PoolStats};
pub use reply::{Reply, Sentence};
pub use transport::{PoolTransport, Transport};
