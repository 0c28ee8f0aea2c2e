// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! VLAN, VRRP and veth interfaces plus bridge VLAN filtering

use crate::resource::{Action, Resource, client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// An 802.1Q sub-interface (`/interface/vlan`)
    pub struct InterfaceVlan7 {
        pub id: String => ".id",
        pub name: String => "name",
        pub vlan_id: u16 => "vlan-id",
        pub interface: String => "interface",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub mtu: u16 => "mtu",
        pub use_service_tag: Option<bool> => "use-service-tag",
    }
}

impl_resource! {
    InterfaceVlan7 {
        kind: "vlan interface",
        menu: "/interface/vlan",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    InterfaceVlan7 {
        add add_interface_vlan7;
        find find_interface_vlan7(name);
        update update_interface_vlan7;
        delete delete_interface_vlan7(name);
        list list_interface_vlans7;
    }
}

routeros_resource! {
    /// VLAN filtering settings of an existing bridge (`/interface/bridge`)
    pub struct BridgeVlanFiltering {
        pub id: String => ".id",
        pub bridge: String => "name",
        pub vlan_filtering: Option<bool> => "vlan-filtering",
        pub pvid: u16 => "pvid",
        pub frame_types: String => "frame-types",
        pub ingress_filtering: Option<bool> => "ingress-filtering",
        pub ether_type: String => "ether-type",
    }
}

impl Resource for BridgeVlanFiltering {
    const KIND: &'static str = "bridge vlan filtering";

    fn action_to_command(action: Action) -> Option<&'static str> {
        match action {
            Action::Find => Some("/interface/bridge/print"),
            Action::Update => Some("/interface/bridge/set"),
            // The bridge itself is owned elsewhere
            Action::Add | Action::Delete => None,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn find_field(&self) -> &'static str {
        "name"
    }

    fn find_field_value(&self) -> &str {
        &self.bridge
    }

    fn delete_field(&self) -> &'static str {
        ".id"
    }

    fn delete_field_value(&self) -> &str {
        &self.id
    }
}

client_wrappers! {
    BridgeVlanFiltering {
        find find_bridge_vlan_filtering(bridge);
        update update_bridge_vlan_filtering;
    }
}

routeros_resource! {
    /// A VRRP virtual router interface (`/interface/vrrp`)
    pub struct InterfaceVrrp {
        pub id: String => ".id",
        pub name: String => "name",
        pub interface: String => "interface",
        pub vrid: u8 => "vrid",
        pub priority: u8 => "priority",
        pub version: u8 => "version",
        pub authentication: String => "authentication",
        pub password: String => "password",
        pub interval: String => "interval",
        pub preemption_mode: Option<bool> => "preemption-mode",
        pub v3_protocol: String => "v3-protocol",
        pub on_backup: String => "on-backup",
        pub on_master: String => "on-master",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub running: bool => "running" [readonly],
    }
}

impl_resource! {
    InterfaceVrrp {
        kind: "vrrp interface",
        menu: "/interface/vrrp",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    InterfaceVrrp {
        add add_interface_vrrp;
        find find_interface_vrrp(name);
        update update_interface_vrrp;
        delete delete_interface_vrrp(name);
        list list_interface_vrrp;
    }
}

routeros_resource! {
    /// A virtual ethernet pair end used by containers (`/interface/veth`)
    pub struct InterfaceVeth {
        pub id: String => ".id",
        pub name: String => "name",
        pub address: Vec<String> => "address",
        pub gateway: String => "gateway",
        pub gateway6: String => "gateway6",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub running: bool => "running" [readonly],
    }
}

impl_resource! {
    InterfaceVeth {
        kind: "veth interface",
        menu: "/interface/veth",
        find: "name" => name,
        delete: ".id" => id,
    }
}

client_wrappers! {
    InterfaceVeth {
        add add_interface_veth;
        find find_interface_veth(name);
        update update_interface_veth;
        delete delete_interface_veth(name);
        list list_interface_veths;
    }
}
