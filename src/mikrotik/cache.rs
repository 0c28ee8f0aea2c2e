// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Name-keyed read cache with generation based invalidation and single-flight fetches

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::error::Result;
use crate::metrics::MetricsRegistry;

struct CacheEntry<T> {
    generation: u64,
    value: Arc<T>,
}

struct CacheInner<T> {
    generation: u64,
    // Generation in which a fetch or preload last succeeded
    filled: Option<u64>,
    entries: HashMap<String, CacheEntry<T>>,
}

impl<T> CacheInner<T> {
    fn current(&self, name: &str) -> Option<Arc<T>> {
        self.entries
            .get(name)
            .filter(|entry| entry.generation == self.generation)
            .map(|entry| Arc::clone(&entry.value))
    }
}

/// Cache of one resource kind
///
/// Entries tagged with an older generation are invisible, so invalidation is
/// a counter bump and the map keeps its entries until they are refetched. A fetch that started before an invalidation stores its
/// result under the old generation and can never serve a stale read.
pub(crate) struct ResourceCache<T> {
    kind: &'static str,
    metrics: MetricsRegistry,
    inner: RwLock<CacheInner<T>>,
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T> ResourceCache<T> {
    pub(crate) fn new(kind: &'static str, metrics: MetricsRegistry) -> Self {
        Self {
            kind,
            metrics,
            inner: RwLock::new(CacheInner {
                generation: 0,
                filled: None,
                entries: HashMap::new(),
            }),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn get(&self, name: &str) -> Option<Arc<T>> {
        self.inner.read().await.current(name)
    }

    /// Returns the cached entry or runs `fetch`, at most once per key at a time
    pub(crate) async fn get_or_fetch<F, Fut>(&self, name: &str, fetch: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.get(name).await {
            tracing::trace!("{} cache hit: {}", self.kind, name);
            self.metrics.record_cache_lookup(self.kind, true);
            return Ok(value);
        }

        let flight = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(inflight.entry(name.to_string()).or_default())
        };
        let guard = flight.lock().await;

        // Another caller may have filled the entry while we waited
        if let Some(value) = self.get(name).await {
            drop(guard);
            self.release_flight(name, &flight).await;
            tracing::trace!("{} cache filled by concurrent fetch: {}", self.kind, name);
            self.metrics.record_cache_lookup(self.kind, true);
            return Ok(value);
        }

        tracing::debug!("{} cache miss, fetching: {}", self.kind, name);
        self.metrics.record_cache_lookup(self.kind, false);
        let generation = self.inner.read().await.generation;
        let result = match fetch().await {
            Ok(value) => {
                let value = Arc::new(value);
                self.insert_at(name, Arc::clone(&value), generation).await;
                Ok(value)
            }
            Err(e) => Err(e),
        };

        drop(guard);
        self.release_flight(name, &flight).await;
        result
    }

    async fn release_flight(&self, name: &str, flight: &Arc<Mutex<()>>) {
        let mut inflight = self.inflight.lock().await;
        // Only the map and this caller still hold the lock: nobody is waiting
        let idle = inflight
            .get(name)
            .is_some_and(|f| Arc::ptr_eq(f, flight) && Arc::strong_count(f) == 2);
        if idle {
            inflight.remove(name);
        }
    }

    async fn insert_at(&self, name: &str, value: Arc<T>, generation: u64) {
        let mut inner = self.inner.write().await;
        if inner.generation == generation {
            inner.filled = Some(generation);
        }
        inner
            .entries
            .insert(name.to_string(), CacheEntry { generation, value });
    }

    /// Stores a value under the current generation
    pub(crate) async fn put(&self, name: &str, value: T) {
        let mut inner = self.inner.write().await;
        let generation = inner.generation;
        inner.entries.insert(
            name.to_string(),
            CacheEntry {
                generation,
                value: Arc::new(value),
            },
        );
    }

    /// Replaces every entry at once and marks the kind as filled
    pub(crate) async fn replace_all(&self, values: impl IntoIterator<Item = (String, T)>) {
        let mut inner = self.inner.write().await;
        let generation = inner.generation;
        inner.filled = Some(generation);
        inner.entries = values
            .into_iter()
            .map(|(name, value)| {
                (
                    name,
                    CacheEntry {
                        generation,
                        value: Arc::new(value),
                    },
                )
            })
            .collect();
    }

    pub(crate) async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.generation = inner.generation.wrapping_add(1);
    }

    /// Number of entries held and whether the kind was filled since the last invalidation
    pub(crate) async fn stats(&self) -> (usize, bool) {
        let inner = self.inner.read().await;
        (
            inner.entries.len(),
            inner.filled == Some(inner.generation),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cache() -> ResourceCache<String> {
        ResourceCache::new("test", MetricsRegistry::new())
    }

    #[tokio::test]
    async fn test_get_or_fetch_caches_value() {
        let cache = cache();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch("a", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("value".to_string())
                })
                .await
                .unwrap();
            assert_eq!(*value, "value");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.metrics.cache_lookups_total("test", true), 2);
        assert_eq!(cache.metrics.cache_lookups_total("test", false), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_is_not_cached() {
        let cache = cache();
        let err = cache
            .get_or_fetch("a", || async { Err(AppError::NotFound("a".to_string())) })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(cache.get("a").await.is_none());
        assert!(cache.inflight.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_hides_entries_but_keeps_them() {
        let cache = cache();
        cache
            .get_or_fetch("a", || async { Ok("old".to_string()) })
            .await
            .unwrap();
        assert_eq!(cache.stats().await, (1, true));

        cache.invalidate().await;
        assert!(cache.get("a").await.is_none());
        assert_eq!(cache.stats().await, (1, false));

        let value = cache
            .get_or_fetch("a", || async { Ok("new".to_string()) })
            .await
            .unwrap();
        assert_eq!(*value, "new");
        assert_eq!(cache.stats().await, (1, true));
    }

    #[tokio::test]
    async fn test_put_alone_does_not_mark_filled() {
        let cache = cache();
        cache.put("a", "x".to_string()).await;
        assert_eq!(cache.stats().await, (1, false));
        assert_eq!(cache.get("a").await.as_deref().map(String::as_str), Some("x"));
    }

    #[tokio::test]
    async fn test_empty_replace_all_is_valid() {
        let cache = cache();
        cache.replace_all(Vec::new()).await;
        assert_eq!(cache.stats().await, (0, true));
    }

    #[tokio::test]
    async fn test_fetch_started_before_invalidate_is_not_served() {
        let cache = cache();
        let value = cache
            .get_or_fetch("a", || async {
                cache.invalidate().await;
                Ok("stale".to_string())
            })
            .await
            .unwrap();
        // The caller still receives what it fetched
        assert_eq!(*value, "stale");
        assert!(cache.get("a").await.is_none());
        assert!(!cache.stats().await.1);
    }

    #[tokio::test]
    async fn test_replace_all() {
        let cache = cache();
        cache.put("gone", "x".to_string()).await;
        cache
            .replace_all(vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ])
            .await;
        assert!(cache.get("gone").await.is_none());
        assert_eq!(cache.get("b").await.as_deref().map(String::as_str), Some("2"));
        assert_eq!(cache.stats().await, (2, true));
    }
}
