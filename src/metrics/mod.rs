// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics for RouterOS commands, the BGP cache and the connection pool

mod labels;
mod registry;

/// Labels for commands and cache lookups
pub use labels::{CacheLabels, CommandLabels};

/// Prometheus metrics registry
pub use registry::{CommandOutcome, MetricsRegistry};
