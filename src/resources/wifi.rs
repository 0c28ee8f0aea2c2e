// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS v7 WiFi (wifiwave2) interfaces, radios and profiles

use crate::resource::{client_wrappers, impl_resource, routeros_resource};

routeros_resource! {
    /// A WiFi interface (`/interface/wifi`)
    pub struct InterfaceWiFi {
        pub id: String => ".id",
        pub name: String => "name",
        pub configuration: String => "configuration",
        pub datapath: String => "datapath",
        pub channel: String => "channel",
        pub security: String => "security",
        pub master_interface: String => "master-interface",
        pub mac_address: String => "mac-address",
        pub mtu: u16 => "mtu",
        pub arp: String => "arp",
        pub arp_timeout: String => "arp-timeout",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
        pub running: bool => "running" [readonly],
        pub radio_mac: String => "radio-mac" [readonly],
    }
}

impl_resource! {
    InterfaceWiFi {
        kind: "wifi interface",
        menu: "/interface/wifi",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    InterfaceWiFi {
        add add_interface_wifi;
        find find_interface_wifi(name);
        update update_interface_wifi;
        delete delete_interface_wifi(name);
        list list_interface_wifi;
    }
}

routeros_resource! {
    /// Per-radio band and channel settings (`/interface/wifi/radio`)
    pub struct WiFiRadio {
        pub id: String => ".id",
        pub name: String => "name",
        pub band: String => "band",
        pub channel_width: String => "channel-width",
        pub frequency: String => "frequency",
        pub skip_dfs_channels: String => "skip-dfs-channels",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiRadio {
        kind: "wifi radio",
        menu: "/interface/wifi/radio",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    WiFiRadio {
        add add_wifi_radio;
        find find_wifi_radio(name);
        update update_wifi_radio;
        delete delete_wifi_radio(name);
        list list_wifi_radios;
    }
}

routeros_resource! {
    /// SSID and regulatory profile (`/interface/wifi/configuration`)
    pub struct WiFiConfiguration {
        pub id: String => ".id",
        pub name: String => "name",
        pub ssid: String => "ssid",
        pub mode: String => "mode",
        pub hide_ssid: Option<bool> => "hide-ssid",
        pub security: String => "security",
        pub country: String => "country",
        pub installation: String => "installation",
        pub tx_power: u8 => "tx-power",
        pub tx_power_mode: String => "tx-power-mode",
        pub he_guard_interval: String => "he-guard-interval",
        pub he_frame_format: String => "he-frame-format",
        pub distance: String => "distance",
        pub max_station_count: u16 => "max-clients",
        pub wps: Option<bool> => "wps",
        pub wps_mode: String => "wps-mode",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiConfiguration {
        kind: "wifi configuration",
        menu: "/interface/wifi/configuration",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    WiFiConfiguration {
        add add_wifi_configuration;
        find find_wifi_configuration(name);
        update update_wifi_configuration;
        delete delete_wifi_configuration(name);
        list list_wifi_configurations;
    }
}

routeros_resource! {
    /// Authentication profile (`/interface/wifi/security`)
    pub struct WiFiSecurity {
        pub id: String => ".id",
        pub name: String => "name",
        pub authentication_types: Vec<String> => "authentication-types",
        pub encryption: Vec<String> => "encryption",
        pub passphrase: String => "passphrase",
        pub management_protection: String => "management-protection",
        pub management_protection_key: String => "management-protection-key",
        pub eap_methods: Vec<String> => "eap-methods",
        pub eap_radius_server: String => "eap-radius-server",
        pub eap_radius_secret: String => "eap-radius-secret",
        pub eap_radius_port: u16 => "eap-radius-port",
        pub eap_radius_accounting: Option<bool> => "eap-accounting",
        pub eap_radius_accounting_port: u16 => "eap-radius-accounting-port",
        pub eap_tls_certificate: String => "eap-tls-certificate",
        pub sae_pwe: String => "sae-pwe",
        pub sae_groups: String => "sae-groups",
        pub ft: Option<bool> => "ft",
        pub ft_over_ds: Option<bool> => "ft-over-ds",
        pub ft_preserve_vlanid: Option<bool> => "ft-preserve-vlanid",
        pub group_key_update: String => "group-key-update",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiSecurity {
        kind: "wifi security",
        menu: "/interface/wifi/security",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    WiFiSecurity {
        add add_wifi_security;
        find find_wifi_security(name);
        update update_wifi_security;
        delete delete_wifi_security(name);
        list list_wifi_securities;
    }
}

routeros_resource! {
    /// Band and frequency profile (`/interface/wifi/channel`)
    pub struct WiFiChannel {
        pub id: String => ".id",
        pub name: String => "name",
        pub band: String => "band",
        pub frequency: Vec<String> => "frequency",
        pub width: String => "width",
        pub secondary_frequency: String => "secondary-frequency",
        pub skip_dfs_channels: String => "skip-dfs-channels",
        pub reselect_interval: String => "reselect-interval",
        pub control_channel_position: String => "control-channel-position",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiChannel {
        kind: "wifi channel",
        menu: "/interface/wifi/channel",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    WiFiChannel {
        add add_wifi_channel;
        find find_wifi_channel(name);
        update update_wifi_channel;
        delete delete_wifi_channel(name);
        list list_wifi_channels;
    }
}

routeros_resource! {
    /// Bridging profile (`/interface/wifi/datapath`)
    pub struct WiFiDatapath {
        pub id: String => ".id",
        pub name: String => "name",
        pub bridge: String => "bridge",
        pub bridge_horizon: u32 => "bridge-horizon",
        pub bridge_cost: u32 => "bridge-cost",
        pub vlan_id: u16 => "vlan-id",
        pub client_isolation: Option<bool> => "client-isolation",
        pub arp: String => "arp",
        pub arp_timeout: String => "arp-timeout",
        pub interface_list: String => "interface-list",
        pub l2mtu: u16 => "l2mtu",
        pub mtu: u16 => "mtu",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiDatapath {
        kind: "wifi datapath",
        menu: "/interface/wifi/datapath",
        find: "name" => name,
        delete: "numbers" => name,
    }
}

client_wrappers! {
    WiFiDatapath {
        add add_wifi_datapath;
        find find_wifi_datapath(name);
        update update_wifi_datapath;
        delete delete_wifi_datapath(name);
        list list_wifi_datapaths;
    }
}

routeros_resource! {
    /// Station admission rule (`/interface/wifi/access-list`)
    pub struct WiFiAccessList {
        pub id: String => ".id",
        pub mac_address: String => "mac-address",
        pub action: String => "action",
        pub interface: String => "interface",
        pub ssid_regexp: String => "ssid-regexp",
        pub vlan_id: u16 => "vlan-id",
        pub signal_range: String => "signal-range",
        pub time: String => "time",
        pub client_isolation: Option<bool> => "client-isolation",
        pub radius_accounting: Option<bool> => "radius-accounting",
        pub passphrase: String => "passphrase",
        pub disabled: Option<bool> => "disabled",
        pub comment: String => "comment",
    }
}

impl_resource! {
    WiFiAccessList {
        kind: "wifi access list entry",
        menu: "/interface/wifi/access-list",
        find: "mac-address" => mac_address,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    WiFiAccessList {
        add add_wifi_access_list;
        find find_wifi_access_list(mac_address);
        update update_wifi_access_list;
        delete delete_wifi_access_list(mac_address);
        list list_wifi_access_lists;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::marshal;
    use crate::resource::{Action, Resource};

    #[test]
    fn test_interface_wifi_skips_readonly_fields() {
        let iface = InterfaceWiFi {
            name: "wifi1".to_string(),
            configuration: "home".to_string(),
            disabled: Some(false),
            running: true,
            radio_mac: "AA:BB:CC:DD:EE:FF".to_string(),
            ..Default::default()
        };
        assert_eq!(
            marshal("/interface/wifi/set", &iface),
            vec![
                "/interface/wifi/set",
                "=name=wifi1",
                "=configuration=home",
                "=disabled=no"
            ]
        );
    }

    #[test]
    fn test_security_lists_are_comma_joined() {
        let security = WiFiSecurity {
            name: "home-sec".to_string(),
            authentication_types: vec!["wpa2-psk".to_string(), "wpa3-psk".to_string()],
            ..Default::default()
        };
        let words = marshal("/interface/wifi/security/add", &security);
        assert!(words.contains(&"=authentication-types=wpa2-psk,wpa3-psk".to_string()));
    }

    #[test]
    fn test_access_list_is_keyed_by_mac() {
        let entry = WiFiAccessList {
            mac_address: "00:11:22:33:44:55".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.find_field(), "mac-address");
        assert_eq!(entry.find_field_value(), "00:11:22:33:44:55");
        // Removal needs the id, which comes from a lookup
        assert_eq!(entry.delete_field_value(), "");
    }

    #[test]
    fn test_radio_menu_commands() {
        assert_eq!(
            WiFiRadio::action_to_command(Action::Update),
            Some("/interface/wifi/radio/set")
        );
        assert_eq!(
            WiFiRadio::action_to_command(Action::Delete),
            Some("/interface/wifi/radio/remove")
        );
    }
}
