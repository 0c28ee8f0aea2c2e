// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! The contract every RouterOS menu type implements
//!
//! A resource knows its command path for each [`Action`], which attribute
//! identifies it after `/add`, which attribute a filtered print searches on,
//! and which attribute `/remove` is addressed by. The dispatcher in
//! [`crate::mikrotik::MikroTikClient`] drives everything else generically.

mod macros;

pub(crate) use macros::{client_wrappers, impl_resource, menu_commands, routeros_resource};

use std::fmt;

use crate::codec::WireFields;
use crate::mikrotik::Reply;

/// The four generic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Find,
    Update,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Find => "find",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed RouterOS menu entry
pub trait Resource: WireFields + Clone + Send + Sync + 'static {
    /// Human readable kind used in logs, errors and metrics
    const KIND: &'static str;

    /// Menus with exactly one entry (`/snmp`, `/container/config`): finds are
    /// unfiltered and updates need no identifier
    const SINGLETON: bool = false;

    /// Command path for an action, `None` when the menu does not support it
    fn action_to_command(action: Action) -> Option<&'static str>;

    fn id_field(&self) -> &'static str {
        ".id"
    }

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn find_field(&self) -> &'static str;

    fn find_field_value(&self) -> &str;

    fn delete_field(&self) -> &'static str;

    fn delete_field_value(&self) -> &str;

    /// Records the identifier RouterOS assigned on `/add`
    fn after_add_hook(&mut self, reply: &Reply) {
        if let Some(ret) = reply.ret() {
            self.set_id(ret.to_string());
        }
    }
}
