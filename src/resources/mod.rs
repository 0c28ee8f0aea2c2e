// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Typed RouterOS configuration objects
//!
//! Each submodule declares the resource structs of one area together with the
//! typed `MikroTikClient` methods that operate on them.

mod bgp;
mod container;
mod firewall;
mod interface;
mod ospf;
mod queue;
mod routing;
mod snmp;
mod system;
mod wifi;

pub use bgp::{BgpConnection, BgpInstanceV7, BgpSession, BgpTemplate};
pub use container::{Container, ContainerConfig, ContainerEnv, ContainerMount};
pub use firewall::{FirewallNat, FirewallRaw};
pub use interface::{BridgeVlanFiltering, InterfaceVeth, InterfaceVlan7, InterfaceVrrp};
pub use ospf::{OspfAreaV7, OspfInstanceV7, OspfInterfaceTemplateV7};
pub use queue::QueueType;
pub use routing::{
    RoutingFilterChain, RoutingFilterRule, RoutingFilterSelectChain, RoutingRule, RoutingTable,
    Vrf,
};
pub use snmp::{Snmp, SnmpCommunity};
pub use system::{File, SystemBackup, SystemBackupSave, SystemLogging, SystemLoggingAction};
pub use wifi::{
    InterfaceWiFi, WiFiAccessList, WiFiChannel, WiFiConfiguration, WiFiDatapath, WiFiRadio,
    WiFiSecurity,
};
