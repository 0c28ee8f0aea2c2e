// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS v7 BGP: connections, instances, templates and live sessions

use crate::resource::{Action, Resource, client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// A BGP peering (`/routing/bgp/connection`)
    pub struct BgpConnection {
        pub id: String => ".id",
        pub name: String => "name",
        pub as_number: u32 => "as",
        pub instance: String => "instance",
        pub disabled: Option<bool> => "disabled",

        pub local_role: String => "local.role",
        pub local_address: String => "local.address",

        pub remote_address: String => "remote.address",
        pub remote_as: u32 => "remote.as",
        pub remote_port: u16 => "remote.port",

        pub listen: Option<bool> => "listen",
        pub router_id: String => "router-id",
        pub nexthop_choice: String => "nexthop-choice",

        pub hold_time: String => "hold-time",
        pub keepalive_time: String => "keepalive-time",
        pub connect_retry_time: String => "connect-retry-time",

        pub ttl: String => "ttl",
        pub multihop: Option<bool> => "multihop",
        pub use_bfd: Option<bool> => "use-bfd",
        pub address_families: String => "address-families",

        pub input_filter: String => "input.filter",
        pub input_accept_nlri: String => "input.accept-nlri",
        pub input_accept_communities: String => "input.accept-communities",

        pub output_filter: String => "output.filter",
        pub output_default_originate: String => "output.default-originate",
        pub output_network: String => "output.network",
        pub output_redistribute: String => "output.redistribute",

        pub tcp_md5_key: String => "tcp-md5-key",

        pub use_mpls: Option<bool> => "use-mpls",
        pub vpnv4: Option<bool> => "vpnv4",
        pub vpnv6: Option<bool> => "vpnv6",
        pub vrf: String => "vrf",
        pub route_distinguisher: String => "route-distinguisher",
        pub routing_table: String => "routing-table",

        pub comment: String => "comment",
        pub templates: Vec<String> => "templates",
    }
}

impl_resource! {
    BgpConnection {
        kind: "bgp connection",
        menu: "/routing/bgp/connection",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    BgpConnection {
        add add_bgp_connection;
        find find_bgp_connection(name);
        update update_bgp_connection;
        delete delete_bgp_connection(name);
        list list_bgp_connections;
    }
}

routeros_resource! {
    /// A v7 BGP instance (`/routing/bgp/instance`)
    pub struct BgpInstanceV7 {
        pub id: String => ".id",
        pub name: String => "name",
        pub as_number: u32 => "as",
        pub router_id: String => "router-id",
        pub client_to_client_reflection: Option<bool> => "client-to-client-reflection",
        pub cluster_id: String => "cluster-id",
        pub confederation: u32 => "confederation",
        pub ignore_as_path_len: Option<bool> => "ignore-as-path-len",
        pub out_filter: String => "out-filter",
        pub routing_table: String => "routing-table",
        pub redistribute_connected: Option<bool> => "redistribute-connected",
        pub redistribute_ospf: Option<bool> => "redistribute-ospf",
        pub redistribute_other_bgp: Option<bool> => "redistribute-other-bgp",
        pub redistribute_rip: Option<bool> => "redistribute-rip",
        pub redistribute_static: Option<bool> => "redistribute-static",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub vrf: String => "vrf",
    }
}

impl_resource! {
    BgpInstanceV7 {
        kind: "bgp instance",
        menu: "/routing/bgp/instance",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    BgpInstanceV7 {
        add add_bgp_instance_v7;
        find find_bgp_instance_v7(name);
        update update_bgp_instance_v7;
        delete delete_bgp_instance_v7(name);
        list list_bgp_instances_v7;
    }
}

routeros_resource! {
    /// Shared peer settings (`/routing/bgp/template`)
    pub struct BgpTemplate {
        pub id: String => ".id",
        pub name: String => "name",
        pub as_number: u32 => "as",
        pub disabled: Option<bool> => "disabled",
        pub router_id: String => "router-id",
        pub address_families: String => "address-families",
        pub as_override: Option<bool> => "as-override",
        pub cisco: Option<bool> => "cisco",
        pub comment: String => "comment",
        pub connect_retry_time: String => "connect-retry-time",
        pub hold_time: String => "hold-time",
        pub input_affixes: String => "input.affixes",
        pub input_filter: String => "input.filter",
        pub input_limit: u32 => "input.limit",
        pub keepalive_time: String => "keepalive-time",
        pub multihop: Option<bool> => "multihop",
        pub nexthop_choice: String => "nexthop-choice",
        pub output_affixes: String => "output.affixes",
        pub output_default_originate: String => "output.default-originate",
        pub output_filter: String => "output.filter",
        pub output_filter_chain: String => "output.filter-chain",
        pub output_keepalive_time: String => "output.keepalive-time",
        pub output_network: String => "output.network",
        pub passive: Option<bool> => "passive",
        pub remove_private_as: Option<bool> => "remove-private-as",
        pub route_reflect: Option<bool> => "route-reflect",
        pub ttl: String => "ttl",
        pub use_bfd: Option<bool> => "use-bfd",
    }
}

impl_resource! {
    BgpTemplate {
        kind: "bgp template",
        menu: "/routing/bgp/template",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    BgpTemplate {
        add add_bgp_template;
        find find_bgp_template(name);
        update update_bgp_template;
        delete delete_bgp_template(name);
        list list_bgp_templates;
    }
}

routeros_resource! {
    /// Live state of a BGP peering (`/routing/bgp/session`), read only
    pub struct BgpSession {
        pub id: String => ".id",
        pub name: String => "name",
        pub established: bool => "established",

        pub remote_address: String => "remote.address",
        pub remote_as: u32 => "remote.as",
        pub remote_id: String => "remote.id",
        pub remote_capabilities: String => "remote.capabilities",
        pub remote_afi: String => "remote.afi",
        pub remote_messages: u64 => "remote.messages",
        pub remote_bytes: u64 => "remote.bytes",
        pub remote_eor: String => "remote.eor",
        pub remote_refused_cap_opt: bool => "remote.refused-cap-opt",

        pub local_address: String => "local.address",
        pub local_as: u32 => "local.as",
        pub local_id: String => "local.id",
        pub local_capabilities: String => "local.capabilities",
        pub local_messages: u64 => "local.messages",
        pub local_bytes: u64 => "local.bytes",
        pub local_eor: String => "local.eor",

        pub hold_time: String => "hold-time",
        pub keepalive_time: String => "keepalive-time",
        pub uptime: String => "uptime",

        pub output_procid: u32 => "output.procid",
        pub output_keep_sent_attributes: bool => "output.keep-sent-attributes",
        pub output_last_notification: String => "output.last-notification",
        pub input_procid: u32 => "input.procid",
        pub input_limit_process_routes: u64 => "input.limit-process-routes",

        pub state: String => "state",
        pub prefix_count: u64 => "prefix-count",
    }
}

impl Resource for BgpSession {
    const KIND: &'static str = "bgp session";

    fn action_to_command(action: Action) -> Option<&'static str> {
        match action {
            Action::Find => Some("/routing/bgp/session/print"),
            Action::Add | Action::Update | Action::Delete => None,
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
        &self.name
    }

    fn delete_field(&self) -> &'static str {
        "numbers"
    }

    fn delete_field_value(&self) -> &str {
        &self.name
    }
}

client_wrappers! {
    BgpSession {
        find find_bgp_session(name);
        list list_bgp_sessions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{marshal, unmarshal};
    use crate::mikrotik::Sentence;

    #[test]
    fn test_bgp_connection_add_words() {
        let conn = BgpConnection {
            name: "peer1".to_string(),
            as_number: 65530,
            remote_address: "10.0.0.2".to_string(),
            remote_as: 65531,
            listen: Some(true),
            templates: vec!["default".to_string(), "ibgp".to_string()],
            ..Default::default()
        };
        let command = BgpConnection::action_to_command(Action::Add).unwrap();
        assert_eq!(
            marshal(command, &conn),
            vec![
                "/routing/bgp/connection/add",
                "=name=peer1",
                "=as=65530",
                "=remote.address=10.0.0.2",
                "=remote.as=65531",
                "=listen=yes",
                "=templates=default,ibgp",
            ]
        );
    }

    #[test]
    fn test_bgp_connection_lookup_fields() {
        let conn = BgpConnection {
            id: "*1".to_string(),
            name: "peer1".to_string(),
            ..Default::default()
        };
        assert_eq!(conn.find_field(), "name");
        assert_eq!(conn.find_field_value(), "peer1");
        assert_eq!(conn.delete_field(), "numbers");
        assert_eq!(conn.delete_field_value(), "peer1");
        assert_eq!(conn.id_field(), ".id");
    }

    #[test]
    fn test_bgp_session_is_read_only() {
        assert_eq!(
            BgpSession::action_to_command(Action::Find),
            Some("/routing/bgp/session/print")
        );
        assert_eq!(BgpSession::action_to_command(Action::Add), None);
        assert_eq!(BgpSession::action_to_command(Action::Update), None);
        assert_eq!(BgpSession::action_to_command(Action::Delete), None);
    }

    #[test]
    fn test_bgp_session_decode() {
        let sentence: Sentence = [
            (".id", "*3"),
            ("name", "peer1-1"),
            ("established", "true"),
            ("remote.as", "65531"),
            ("prefix-count", "12"),
            ("uptime", "1h2m3s"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let session: BgpSession = unmarshal(&sentence).unwrap();
        assert!(session.established);
        assert_eq!(session.remote_as, 65531);
        assert_eq!(session.prefix_count, 12);
        assert_eq!(session.uptime, "1h2m3s");
    }
}
