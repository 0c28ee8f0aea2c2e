// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Routing filters, tables, policy rules and VRFs

use crate::error::Result;
use crate::mikrotik::MikroTikClient;
use crate::resource::{client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// A route filter rule (`/routing/filter/rule`)
    pub struct RoutingFilterRule {
        pub id: String => ".id",
        pub chain: String => "chain",
        pub rule: String => "rule",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub invalid: bool => "invalid" [readonly],
        pub dynamic: bool => "dynamic" [readonly],
    }
}

impl_resource! {
    RoutingFilterRule {
        kind: "routing filter rule",
        menu: "/routing/filter/rule",
        find: ".id" => id,
        delete: ".id" => id,
    }
}

client_wrappers! {
    RoutingFilterRule {
        add add_routing_filter_rule;
        find find_routing_filter_rule(id);
        update update_routing_filter_rule;
        delete delete_routing_filter_rule(id);
        list list_routing_filter_rules;
    }
}

routeros_resource! {
    /// A named filter chain (`/routing/filter/chain`)
    pub struct RoutingFilterChain {
        pub id: String => ".id",
        pub name: String => "name",
        pub dynamic: Option<bool> => "dynamic",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    RoutingFilterChain {
        kind: "routing filter chain",
        menu: "/routing/filter/chain",
        find: "name" => name,
        delete: "name" => name,
    }
}

client_wrappers! {
    RoutingFilterChain {
        add add_routing_filter_chain;
        find find_routing_filter_chain(name);
        update update_routing_filter_chain;
        delete delete_routing_filter_chain(name);
        list list_routing_filter_chains;
    }
}

routeros_resource! {
    /// Route selection chain (`/routing/filter/select-chain`)
    pub struct RoutingFilterSelectChain {
        pub id: String => ".id",
        pub name: String => "name",
        pub chain: String => "chain",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    RoutingFilterSelectChain {
        kind: "routing filter select chain",
        menu: "/routing/filter/select-chain",
        find: "name" => name,
        delete: "name" => name,
    }
}

client_wrappers! {
    RoutingFilterSelectChain {
        add add_routing_filter_select_chain;
        find find_routing_filter_select_chain(name);
        update update_routing_filter_select_chain;
        delete delete_routing_filter_select_chain(name);
        list list_routing_filter_select_chains;
    }
}

routeros_resource! {
    /// A routing table (`/routing/table`)
    pub struct RoutingTable {
        pub id: String => ".id",
        pub name: String => "name",
        pub fib: Option<bool> => "fib",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    RoutingTable {
        kind: "routing table",
        menu: "/routing/table",
        find: "name" => name,
        delete: ".id" => id,
    }
}

client_wrappers! {
    RoutingTable {
        add add_routing_table;
        find find_routing_table(name);
        update update_routing_table;
        delete delete_routing_table(name);
        list list_routing_tables;
    }
}

routeros_resource! {
    /// A policy routing rule (`/routing/rule`)
    pub struct RoutingRule {
        pub id: String => ".id",
        pub dst_address: String => "dst-address",
        pub src_address: String => "src-address",
        pub interface: String => "interface",
        pub routing_mark: String => "routing-mark",
        pub table: String => "table",
        pub action: String => "action",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub min_prefix: u8 => "min-prefix",
    }
}

impl_resource! {
    RoutingRule {
        kind: "routing rule",
        menu: "/routing/rule",
        find: ".id" => id,
        delete: ".id" => id,
    }
}

client_wrappers! {
    RoutingRule {
        add add_routing_rule;
        find find_routing_rule(id);
        update update_routing_rule;
        delete delete_routing_rule(id);
        list list_routing_rules;
    }
}

routeros_resource! {
    /// A virtual routing and forwarding instance (`/ip/vrf`)
    pub struct Vrf {
        pub id: String => ".id",
        pub name: String => "name",
        pub interfaces: Vec<String> => "interfaces",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    Vrf {
        kind: "vrf",
        menu: "/ip/vrf",
        find: "name" => name,
        delete: ".id" => id,
    }
}

client_wrappers! {
    Vrf {
        add add_vrf;
        find find_vrf(name);
        update update_vrf;
        delete delete_vrf(name);
        list list_vrfs;
    }
}

impl MikroTikClient {
    /// First rule of a filter chain
    ///
    /// # Errors
    ///
    /// `NotFound` when the chain has no rules.
    pub async fn find_routing_filter_rule_by_chain(&self, chain: &str) -> Result<RoutingFilterRule> {
        self.find_by::<RoutingFilterRule>("chain", chain).await
    }
}
