// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Firewall NAT and RAW rules, both addressed by RouterOS id

use crate::resource::{client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// A NAT rule (`/ip/firewall/nat`)
    pub struct FirewallNat {
        pub id: String => ".id",
        pub chain: String => "chain",
        pub action: String => "action",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",

        pub src_address: String => "src-address",
        pub dst_address: String => "dst-address",
        pub src_address_list: String => "src-address-list",
        pub dst_address_list: String => "dst-address-list",
        pub protocol: String => "protocol",
        pub src_port: String => "src-port",
        pub dst_port: String => "dst-port",
        pub in_interface: String => "in-interface",
        pub out_interface: String => "out-interface",
        pub in_interface_list: String => "in-interface-list",
        pub out_interface_list: String => "out-interface-list",

        pub connection_state: Vec<String> => "connection-state",
        pub connection_nat_state: Vec<String> => "connection-nat-state",
        pub connection_mark: String => "connection-mark",
        pub packet_mark: String => "packet-mark",
        pub routing_mark: String => "routing-mark",

        pub to_addresses: String => "to-addresses",
        pub to_ports: String => "to-ports",

        pub log: Option<bool> => "log",
        pub log_prefix: String => "log-prefix",

        pub icmp_options: String => "icmp-options",
        pub limit: String => "limit",
        pub time: String => "time",
        pub random: String => "random",
        pub hotspot: String => "hotspot",
        pub content: String => "content",
        pub layer7_protocol: String => "layer7-protocol",
        pub psd: String => "psd",
        pub tcp_flags: String => "tcp-flags",
        pub tcp_mss: String => "tcp-mss",
        pub dst_limit: String => "dst-limit",
        pub address_list: String => "address-list",
        pub address_list_timeout: String => "address-list-timeout",
        pub packet_size: String => "packet-size",
        pub src_address_type: String => "src-address-type",
        pub dst_address_type: String => "dst-address-type",

        pub bytes: u64 => "bytes" [readonly],
        pub packets: u64 => "packets" [readonly],
        pub dynamic: bool => "dynamic" [readonly],
        pub invalid: bool => "invalid" [readonly],
    }
}

impl_resource! {
    FirewallNat {
        kind: "firewall nat rule",
        menu: "/ip/firewall/nat",
        find: ".id" => id,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    FirewallNat {
        add add_firewall_nat;
        find find_firewall_nat(id);
        update update_firewall_nat;
        delete delete_firewall_nat(id);
        list list_firewall_nat;
    }
}

routeros_resource! {
    /// A pre-connection-tracking rule (`/ip/firewall/raw`)
    pub struct FirewallRaw {
        pub id: String => ".id",
        pub action: String => "action",
        pub chain: String => "chain",
        pub comment: String => "comment",
        pub disabled: Option<bool> => "disabled",
        pub src_address: String => "src-address",
        pub dst_address: String => "dst-address",
        pub src_port: String => "src-port",
        pub dst_port: String => "dst-port",
        pub protocol: String => "protocol",
        pub in_interface: String => "in-interface",
        pub out_interface: String => "out-interface",
        pub in_interface_list: String => "in-interface-list",
        pub out_interface_list: String => "out-interface-list",
        pub address_list: String => "address-list",
        pub address_list_timeout: String => "address-list-timeout",
        pub src_address_list: String => "src-address-list",
        pub dst_address_list: String => "dst-address-list",
        pub bytes: u64 => "bytes" [readonly],
        pub packets: u64 => "packets" [readonly],
    }
}

impl_resource! {
    FirewallRaw {
        kind: "firewall raw rule",
        menu: "/ip/firewall/raw",
        find: ".id" => id,
        delete: ".id" => id,
    }
}

client_wrappers! {
    FirewallRaw {
        add add_firewall_raw;
        find find_firewall_raw(id);
        update update_firewall_raw;
        delete delete_firewall_raw(id);
        list list_firewall_raw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{marshal, unmarshal};
    use crate::mikrotik::Sentence;
    use crate::resource::Resource;

    #[test]
    fn test_nat_counters_decoded_but_not_sent() {
        let sentence: Sentence = [
            (".id", "*5"),
            ("chain", "srcnat"),
            ("action", "masquerade"),
            ("bytes", "123456"),
            ("packets", "789"),
            ("dynamic", "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let nat: FirewallNat = unmarshal(&sentence).unwrap();
        assert_eq!(nat.bytes, 123_456);
        assert_eq!(nat.packets, 789);

        let words = marshal("/ip/firewall/nat/set", &nat);
        assert_eq!(
            words,
            vec![
                "/ip/firewall/nat/set",
                "=.id=*5",
                "=chain=srcnat",
                "=action=masquerade"
            ]
        );
    }

    #[test]
    fn test_nat_is_addressed_by_id() {
        let nat = FirewallNat {
            id: "*5".to_string(),
            ..Default::default()
        };
        assert_eq!(nat.find_field(), ".id");
        assert_eq!(nat.delete_field(), "numbers");
        assert_eq!(nat.delete_field_value(), "*5");
    }
}
