// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory RouterOS stand-in for dispatcher tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use mikrotik_provider::{AppError, MikroTikClient, Reply, Result, Sentence, Transport};
use tokio::sync::Mutex;

/// Emulates `add`/`print`/`set`/`remove` on any menu path
///
/// Entries get sequential `.id` values (`*1`, `*2`, ...). Names are unique per
/// menu, a duplicate `add` traps like the device does.
#[derive(Default)]
pub struct FakeRouter {
    menus: Mutex<HashMap<String, Vec<Sentence>>>,
    calls: Mutex<Vec<Vec<String>>>,
    next_id: AtomicUsize,
    offline: AtomicBool,
    latency: Mutex<Option<Duration>>,
}

fn trap(message: &str) -> AppError {
    AppError::Trap {
        category: None,
        message: message.to_string(),
    }
}

fn sentence(pairs: &[(&str, &str)]) -> Sentence {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn matches_target(entry: &Sentence, value: &str) -> bool {
    entry.get(".id").is_some_and(|id| id == value)
        || entry.get("name").is_some_and(|name| name == value)
}

impl FakeRouter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn client(self: &Arc<Self>) -> MikroTikClient {
        MikroTikClient::with_transport(Arc::clone(self) as Arc<dyn Transport>)
    }

    /// Inserts an entry as if it had been created on the device; returns its id
    pub async fn seed(&self, menu: &str, pairs: &[(&str, &str)]) -> String {
        let mut entry = sentence(pairs);
        let id = entry
            .get(".id")
            .cloned()
            .unwrap_or_else(|| self.allocate_id());
        entry.insert(".id".to_string(), id.clone());
        self.menus
            .lock()
            .await
            .entry(menu.to_string())
            .or_default()
            .push(entry);
        id
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn set_latency(&self, latency: Duration) {
        *self.latency.lock().await = Some(latency);
    }

    pub async fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().await.clone()
    }

    /// Number of commands sent with exactly this path
    pub async fn count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|words| words.first().is_some_and(|w| w == path))
            .count()
    }

    pub async fn entries(&self, menu: &str) -> Vec<Sentence> {
        self.menus
            .lock()
            .await
            .get(menu)
            .cloned()
            .unwrap_or_default()
    }

    fn allocate_id(&self) -> String {
        format!("*{:X}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn dispatch(&self, words: &[String]) -> Result<Reply> {
        let Some((path, args)) = words.split_first() else {
            return Err(trap("empty command"));
        };
        let Some((menu, verb)) = path.rsplit_once('/') else {
            return Err(trap("no such command"));
        };

        let mut attrs = Sentence::new();
        let mut queries = Sentence::new();
        for arg in args {
            if let Some((k, v)) = arg.strip_prefix('=').and_then(|a| a.split_once('=')) {
                attrs.insert(k.to_string(), v.to_string());
            } else if let Some((k, v)) = arg.strip_prefix('?').and_then(|a| a.split_once('=')) {
                queries.insert(k.to_string(), v.to_string());
            }
        }

        let mut menus = self.menus.lock().await;
        let entries = menus.entry(menu.to_string()).or_default();
        match verb {
            "print" => Ok(Reply::with_records(
                entries
                    .iter()
                    .filter(|entry| queries.iter().all(|(k, v)| entry.get(k) == Some(v)))
                    .cloned()
                    .collect(),
            )),
            "add" => {
                if let Some(name) = attrs.get("name") {
                    if entries.iter().any(|e| e.get("name") == Some(name)) {
                        return Err(trap("failure: entry already exists"));
                    }
                }
                let id = self.allocate_id();
                attrs.insert(".id".to_string(), id.clone());
                entries.push(attrs);
                Ok(Reply::with_ret(id))
            }
            "set" => {
                let target = attrs.remove(".id").or_else(|| attrs.remove("numbers"));
                let entry = match target {
                    Some(target) => entries.iter_mut().find(|e| matches_target(e, &target)),
                    // Singleton menus
                    None if entries.len() == 1 => entries.first_mut(),
                    None => None,
                };
                let entry = entry.ok_or_else(|| trap("no such item"))?;
                entry.extend(attrs);
                Ok(Reply::default())
            }
            "remove" => {
                let target = attrs
                    .get(".id")
                    .or_else(|| attrs.get("numbers"))
                    .cloned()
                    .ok_or_else(|| trap("missing numbers"))?;
                let before = entries.len();
                entries.retain(|e| !matches_target(e, &target));
                if entries.len() == before {
                    return Err(trap("no such item"));
                }
                Ok(Reply::default())
            }
            _ => Err(trap("no such command")),
        }
    }
}

#[async_trait]
impl Transport for FakeRouter {
    async fn run(&self, words: &[String]) -> Result<Reply> {
        self.calls.lock().await.push(words.to_vec());
        let latency = *self.latency.lock().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::RouterOs("Connection refused".to_string()));
        }
        self.dispatch(words).await
    }
}
