// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Logging rules and actions, files and configuration backups

use serde::Serialize;

use crate::codec::marshal;
use crate::error::{AppError, Result};
use crate::mikrotik::MikroTikClient;
use crate::resource::{Action, Resource, client_wrappers, impl_resource, routeros_resource};

const BACKUP_SUFFIX: &str = ".backup";

routeros_resource! {
    /// A logging rule (`/system/logging`)
    pub struct SystemLogging {
        pub id: String => ".id",
        pub topics: Vec<String> => "topics",
        pub action: String => "action",
        pub prefix: String => "prefix",
        pub disabled: Option<bool> => "disabled",
    }
}

impl_resource! {
    SystemLogging {
        kind: "logging rule",
        menu: "/system/logging",
        find: ".id" => id,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    SystemLogging {
        add add_system_logging;
        find find_system_logging(id);
        update update_system_logging;
        delete delete_system_logging(id);
        list list_system_logging;
    }
}

routeros_resource! {
    /// A logging destination (`/system/logging/action`)
    pub struct SystemLoggingAction {
        pub id: String => ".id",
        pub name: String => "name",
        pub target: String => "target",
        pub remote: String => "remote",
        pub remote_port: u16 => "remote-port",
        pub bsd_syslog: Option<bool> => "bsd-syslog",
        pub syslog_facility: String => "syslog-facility",
        pub src_address: String => "src-address",
        pub memory_lines: u32 => "memory-lines",
        pub disk_file_name: String => "disk-file-name",
        pub disk_file_count: u32 => "disk-file-count",
        pub disk_lines_per_file: u32 => "disk-lines-per-file",
        pub remember: Option<bool> => "remember",
    }
}

impl_resource! {
    SystemLoggingAction {
        kind: "logging action",
        menu: "/system/logging/action",
        find: "name" => name,
        delete: "numbers" => id,
    }
}

client_wrappers! {
    SystemLoggingAction {
        add add_system_logging_action;
        find find_system_logging_action(name);
        update update_system_logging_action;
        delete delete_system_logging_action(name);
        list list_system_logging_actions;
    }
}

routeros_resource! {
    /// A file in the router's storage (`/file`)
    pub struct File {
        pub id: String => ".id",
        pub name: String => "name",
        pub file_type: String => "type",
        pub size: String => "size",
        pub creation_time: String => "creation-time",
    }
}

impl Resource for File {
    const KIND: &'static str = "file";

    fn action_to_command(action: Action) -> Option<&'static str> {
        match action {
            Action::Find => Some("/file/print"),
            Action::Delete => Some("/file/remove"),
            Action::Add | Action::Update => None,
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
        ".id"
    }

    fn delete_field_value(&self) -> &str {
        &self.id
    }
}

client_wrappers! {
    File {
        list list_files;
    }
}

routeros_resource! {
    /// Parameters of `/system/backup/save`
    pub struct SystemBackupSave {
        pub name: String => "name",
        pub password: String => "password",
        pub dont_encrypt: bool => "dont-encrypt",
    }
}

/// A saved configuration backup as seen in the file list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemBackup {
    pub name: String,
    pub size: String,
    pub creation: String,
}

impl From<File> for SystemBackup {
    fn from(file: File) -> Self {
        Self {
            name: file.name,
            size: file.size,
            creation: file.creation_time,
        }
    }
}

fn backup_file_name(name: &str) -> String {
    if name.ends_with(BACKUP_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{BACKUP_SUFFIX}")
    }
}

impl MikroTikClient {
    /// Finds a file by exact name
    ///
    /// The whole file list is scanned client side; RouterOS query matching on
    /// `name` is unreliable for paths.
    ///
    /// # Errors
    ///
    /// `NotFound` when no file has that name.
    pub async fn find_file(&self, name: &str) -> Result<File> {
        self.list_files()
            .await?
            .into_iter()
            .find(|file| file.name == name)
            .ok_or_else(|| AppError::NotFound(format!("file '{name}'")))
    }

    /// Removes a file by exact name
    ///
    /// # Errors
    ///
    /// `NotFound` when no file has that name.
    pub async fn delete_file(&self, name: &str) -> Result<()> {
        let file = self.find_file(name).await?;
        self.delete(&file).await
    }

    /// Saves a configuration backup
    ///
    /// # Errors
    ///
    /// Returns the transport error or the device trap.
    pub async fn save_system_backup(&self, params: &SystemBackupSave) -> Result<()> {
        self.run(marshal("/system/backup/save", params))
            .await
            .map_err(|e| e.context("failed to save backup"))?;
        tracing::info!("System backup '{}' saved", backup_file_name(&params.name));
        Ok(())
    }

    /// Finds a backup file, adding the `.backup` suffix when missing
    ///
    /// # Errors
    ///
    /// `NotFound` when the backup does not exist.
    pub async fn find_system_backup(&self, name: &str) -> Result<SystemBackup> {
        self.find_file(&backup_file_name(name))
            .await
            .map(SystemBackup::from)
    }

    /// Deletes a backup file, adding the `.backup` suffix when missing
    ///
    /// # Errors
    ///
    /// `NotFound` when the backup does not exist.
    pub async fn delete_system_backup(&self, name: &str) -> Result<()> {
        self.delete_file(&backup_file_name(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name("nightly"), "nightly.backup");
        assert_eq!(backup_file_name("nightly.backup"), "nightly.backup");
    }

    #[test]
    fn test_backup_save_words() {
        let params = SystemBackupSave {
            name: "nightly".to_string(),
            dont_encrypt: true,
            ..Default::default()
        };
        assert_eq!(
            marshal("/system/backup/save", &params),
            vec!["/system/backup/save", "=name=nightly", "=dont-encrypt=yes"]
        );
    }

    #[test]
    fn test_backup_from_file() {
        let file = File {
            id: "*9".to_string(),
            name: "nightly.backup".to_string(),
            file_type: "backup".to_string(),
            size: "24.1KiB".to_string(),
            creation_time: "2025-01-01 03:00:00".to_string(),
        };
        let backup = SystemBackup::from(file);
        assert_eq!(backup.name, "nightly.backup");
        assert_eq!(backup.creation, "2025-01-01 03:00:00");
    }

    #[test]
    fn test_logging_topics_are_a_list() {
        let rule = SystemLogging {
            topics: vec!["bgp".to_string(), "!debug".to_string()],
            action: "remote".to_string(),
            ..Default::default()
        };
        assert_eq!(
            marshal("/system/logging/add", &rule),
            vec!["/system/logging/add", "=topics=bgp,!debug", "=action=remote"]
        );
    }
}
