// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS v7 OSPF instances, areas and interface templates

use crate::resource::{client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// An OSPF process (`/routing/ospf/instance`)
    pub struct OspfInstanceV7 {
        pub id: String => ".id",
        pub name: String => "name",
        pub version: u8 => "version",
        pub router_id: String => "router-id",
        pub domain_id: String => "domain-id",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub vrf: String => "vrf",
        pub routing_table: String => "routing-table",
        pub redistribute: Vec<String> => "redistribute",
        pub originate_default: String => "originate-default",
        pub in_filter_chain: String => "in-filter-chain",
        pub out_filter_chain: String => "out-filter-chain",
        pub dynamic: bool => "dynamic" [readonly],
        pub invalid: bool => "invalid" [readonly],
    }
}

impl_resource! {
    OspfInstanceV7 {
        kind: "ospf instance",
        menu: "/routing/ospf/instance",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    OspfInstanceV7 {
        add add_ospf_instance_v7;
        find find_ospf_instance_v7(name);
        update update_ospf_instance_v7;
        delete delete_ospf_instance_v7(name);
        list list_ospf_instances_v7;
    }
}

routeros_resource! {
    /// An OSPF area (`/routing/ospf/area`)
    pub struct OspfAreaV7 {
        pub id: String => ".id",
        pub name: String => "name",
        pub area_id: String => "area-id",
        pub instance: String => "instance",
        pub area_type: String => "type",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub default_cost: u32 => "default-cost",
        pub no_summaries: Option<bool> => "no-summaries",
        pub nssa_translator: String => "nssa-translator",
        pub nssa_propagation: Option<bool> => "nssa-propagation",
        pub dynamic: bool => "dynamic" [readonly],
        pub invalid: bool => "invalid" [readonly],
    }
}

impl_resource! {
    OspfAreaV7 {
        kind: "ospf area",
        menu: "/routing/ospf/area",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    OspfAreaV7 {
        add add_ospf_area_v7;
        find find_ospf_area_v7(name);
        update update_ospf_area_v7;
        delete delete_ospf_area_v7(name);
        list list_ospf_areas_v7;
    }
}

routeros_resource! {
    /// Which interfaces and networks join an area (`/routing/ospf/interface-template`)
    pub struct OspfInterfaceTemplateV7 {
        pub id: String => ".id",
        pub area: String => "area",
        pub networks: Vec<String> => "networks",
        pub interfaces: Vec<String> => "interfaces",
        pub network_type: String => "type",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub cost: u16 => "cost",
        pub priority: u8 => "priority",
        pub passive: Option<bool> => "passive",
        pub auth: String => "auth",
        pub auth_key: String => "auth-key",
        pub auth_id: u32 => "auth-id",
        pub hello_interval: String => "hello-interval",
        pub dead_interval: String => "dead-interval",
        pub retransmit_interval: String => "retransmit-interval",
        pub transmit_delay: String => "transmit-delay",
        pub wait_time: String => "wait-time",
        pub vlink_transit_area: String => "vlink-transit-area",
        pub vlink_neighbor_id: String => "vlink-neighbor-id",
        pub dynamic: bool => "dynamic" [readonly],
        pub invalid: bool => "invalid" [readonly],
    }
}

impl_resource! {
    OspfInterfaceTemplateV7 {
        kind: "ospf interface template",
        menu: "/routing/ospf/interface-template",
        find: ".id" => id,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    OspfInterfaceTemplateV7 {
        add add_ospf_interface_template_v7;
        find find_ospf_interface_template_v7(id);
        update update_ospf_interface_template_v7;
        delete delete_ospf_interface_template_v7(id);
        list list_ospf_interface_templates_v7;
    }
}
