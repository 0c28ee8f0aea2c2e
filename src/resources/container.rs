// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS containers: instances, environment lists, mounts and the global config

use crate::error::Result;
use crate::mikrotik::MikroTikClient;
use crate::resource::{Action, Resource, client_wrappers, impl_resource, routeros_resource};

/// RouterOS id of the single `/container/config` entry
const SINGLETON_ID: &str = "*0";

routeros_resource! {
    /// A container instance (`/container`)
    pub struct Container {
        pub id: String => ".id",
        pub name: String => "name",
        pub remote_image: String => "remote-image",
        pub tag: String => "tag" [readonly],
        pub digest: String => "digest" [readonly],
        pub file: String => "file",
        pub interface: String => "interface",
        pub root_dir: String => "root-dir",
        pub cmd: String => "cmd",
        pub entrypoint: String => "entrypoint",
        pub workdir: String => "workdir",
        pub mounts: Vec<String> => "mounts",
        pub envlist: String => "envlist",
        pub dns: String => "dns",
        pub domain_name: String => "domain-name",
        pub hostname: String => "hostname",
        pub logging: Option<bool> => "logging",
        pub start_on_boot: Option<bool> => "start-on-boot",
        pub auto_restart_interval: String => "auto-restart-interval",
        pub stop_signal: u8 => "stop-signal",
        pub devices: String => "devices",
        pub cpu_list: String => "cpu-list",
        pub user: String => "user",
        pub memory_high: u64 => "memory-high",
        pub status: String => "status" [readonly],
        pub comment: String => "comment",
    }
}

impl_resource! {
    Container {
        kind: "container",
        menu: "/container",
        find: "name" => name,
        delete: "name" => name,
    }
}

client_wrappers! {
    Container {
        add add_container;
        find find_container(name);
        update update_container;
        delete delete_container(name);
        list list_containers;
    }
}

routeros_resource! {
    /// One variable of a named environment list (`/container/envs`)
    pub struct ContainerEnv {
        pub id: String => ".id",
        pub list: String => "list",
        pub key: String => "key",
        pub value: String => "value",
        pub comment: String => "comment",
    }
}

impl_resource! {
    ContainerEnv {
        kind: "container env",
        menu: "/container/envs",
        find: ".id" => id,
        delete: ".id" => id,
    }
}

client_wrappers! {
    ContainerEnv {
        add add_container_env;
        find find_container_env(id);
        update update_container_env;
        delete delete_container_env(id);
        list list_container_envs;
    }
}

routeros_resource! {
    /// A host directory bound into containers (`/container/mounts`)
    pub struct ContainerMount {
        pub id: String => ".id",
        pub name: String => "name",
        pub src: String => "src",
        pub dst: String => "dst",
        pub comment: String => "comment",
    }
}

impl_resource! {
    ContainerMount {
        kind: "container mount",
        menu: "/container/mounts",
        find: "name" => name,
        delete: "name" => name,
    }
}

client_wrappers! {
    ContainerMount {
        add add_container_mount;
        find find_container_mount(name);
        update update_container_mount;
        delete delete_container_mount(name);
        list list_container_mounts;
    }
}

routeros_resource! {
    /// Global container settings (`/container/config`), a singleton
    pub struct ContainerConfig {
        pub registry_url: String => "registry-url",
        pub tmpdir: String => "tmpdir",
        pub memory_high: u64 => "memory-high",
        pub username: String => "username",
        pub password: String => "password",
    }
}

impl Resource for ContainerConfig {
    const KIND: &'static str = "container config";
    const SINGLETON: bool = true;

    fn action_to_command(action: Action) -> Option<&'static str> {
        match action {
            Action::Find => Some("/container/config/print"),
            Action::Update => Some("/container/config/set"),
            Action::Add | Action::Delete => None,
        }
    }

    fn id(&self) -> &str {
        SINGLETON_ID
    }

    fn set_id(&mut self, _id: String) {}

    fn find_field(&self) -> &'static str {
        ".id"
    }

    fn find_field_value(&self) -> &str {
        SINGLETON_ID
    }

    fn delete_field(&self) -> &'static str {
        ".id"
    }

    fn delete_field_value(&self) -> &str {
        SINGLETON_ID
    }
}

client_wrappers! {
    ContainerConfig {
        get get_container_config;
        update update_container_config;
    }
}

impl MikroTikClient {
    /// Looks a container up by its RouterOS id instead of its name
    ///
    /// # Errors
    ///
    /// `NotFound` when no container has that id.
    pub async fn find_container_by_id(&self, id: &str) -> Result<Container> {
        self.find_by::<Container>(".id", id).await
    }

    /// Starts a stopped container
    ///
    /// # Errors
    ///
    /// Returns the transport error or the device trap.
    pub async fn start_container(&self, name: &str) -> Result<()> {
        self.run(vec![
            "/container/start".to_string(),
            format!("=numbers={name}"),
        ])
        .await
        .map_err(|e| e.context("failed to start container"))?;
        tracing::info!("Container '{}' started", name);
        Ok(())
    }

    /// Stops a running container
    ///
    /// # Errors
    ///
    /// Returns the transport error or the device trap.
    pub async fn stop_container(&self, name: &str) -> Result<()> {
        self.run(vec![
            "/container/stop".to_string(),
            format!("=numbers={name}"),
        ])
        .await
        .map_err(|e| e.context("failed to stop container"))?;
        tracing::info!("Container '{}' stopped", name);
        Ok(())
    }
}
