// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! SNMP agent settings and communities

use crate::resource::{Action, Resource, client_wrappers, impl_resource, routeros_resource};

/// RouterOS id of the single `/snmp` entry
const SNMP_ID: &str = "*0";

routeros_resource! {
    /// SNMP agent settings (`/snmp`), a singleton
    pub struct Snmp {
        pub enabled: Option<bool> => "enabled",
        pub contact: String => "contact",
        pub location: String => "location",
        pub engine_id: String => "engine-id" [readonly],
        pub trap_version: u8 => "trap-version",
        pub trap_community: String => "trap-community",
        pub trap_target: Vec<String> => "trap-target",
        pub trap_generators: Vec<String> => "trap-generators",
    }
}

impl Resource for Snmp {
    const KIND: &'static str = "snmp";
    const SINGLETON: bool = true;

    fn action_to_command(action: Action) -> Option<&'static str> {
        match action {
            // There is nothing to create; "adding" applies the settings
            Action::Add | Action::Update => Some("/snmp/set"),
            Action::Find => Some("/snmp/print"),
            Action::Delete => None,
        }
    }

    fn id(&self) -> &str {
        SNMP_ID
    }

    fn set_id(&mut self, _id: String) {}

    fn find_field(&self) -> &'static str {
        ".id"
    }

    fn find_field_value(&self) -> &str {
        SNMP_ID
    }

    fn delete_field(&self) -> &'static str {
        ".id"
    }

    fn delete_field_value(&self) -> &str {
        SNMP_ID
    }
}

client_wrappers! {
    Snmp {
        get get_snmp;
        update update_snmp;
    }
}

routeros_resource! {
    /// An SNMP community (`/snmp/community`)
    pub struct SnmpCommunity {
        pub id: String => ".id",
        pub name: String => "name",
        pub security: String => "security",
        pub read_access: Option<bool> => "read-access",
        pub write_access: Option<bool> => "write-access",
        pub addresses: Vec<String> => "addresses",
        pub disabled: Option<bool> => "disabled",
    }
}

impl_resource! {
    SnmpCommunity {
        kind: "snmp community",
        menu: "/snmp/community",
        find: "name" => name,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    SnmpCommunity {
        add add_snmp_community;
        find find_snmp_community(name);
        update update_snmp_community;
        delete delete_snmp_community(name);
        list list_snmp_communities;
    }
}
