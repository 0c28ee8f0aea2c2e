// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::FakeRouter;
use futures_util::future::join_all;
use mikrotik_provider::resources::BgpConnection;
use mikrotik_provider::{AppError, CacheStats};

const INSTANCE_PRINT: &str = "/routing/bgp/instance/print";
const CONNECTION_PRINT: &str = "/routing/bgp/connection/print";
const SESSION_PRINT: &str = "/routing/bgp/session/print";

fn connection(name: &str, remote_as: u32) -> BgpConnection {
    BgpConnection {
        name: name.to_string(),
        as_number: 65530,
        remote_address: "10.0.0.2".to_string(),
        remote_as,
        ..Default::default()
    }
}

#[tokio::test]
async fn cached_lookup_fetches_once_until_invalidated() {
    let router = FakeRouter::new();
    router
        .seed("/routing/bgp/instance", &[("name", "inst1"), ("as", "65530")])
        .await;
    let bgp = router.client().new_bgp_batch_operations();

    let first = bgp.get_or_fetch_instance_v7("inst1").await.unwrap();
    let second = bgp.get_or_fetch_instance_v7("inst1").await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.as_number, 65530);
    assert_eq!(router.count(INSTANCE_PRINT).await, 1);

    bgp.invalidate_cache().await;
    // Entries are kept, only their validity is dropped
    assert_eq!(
        bgp.cache_stats().await,
        CacheStats {
            instances_v7_count: 1,
            ..CacheStats::default()
        }
    );

    let third = bgp.get_or_fetch_instance_v7("inst1").await.unwrap();
    assert_eq!(*third, *first);
    assert_eq!(router.count(INSTANCE_PRINT).await, 2);
}

#[tokio::test]
async fn failed_lookup_is_not_cached() {
    let router = FakeRouter::new();
    let bgp = router.client().new_bgp_batch_operations();

    let err = bgp.get_or_fetch_template("default").await.unwrap_err();
    assert!(err.is_not_found());

    router
        .seed("/routing/bgp/template", &[("name", "default")])
        .await;
    let template = bgp.get_or_fetch_template("default").await.unwrap();
    assert_eq!(template.name, "default");
}

#[tokio::test]
async fn concurrent_misses_share_one_fetch() {
    let router = FakeRouter::new();
    router
        .seed("/routing/bgp/connection", &[("name", "peer1"), ("remote.as", "65531")])
        .await;
    router.set_latency(Duration::from_millis(20)).await;
    let bgp = router.client().new_bgp_batch_operations();

    let results = join_all((0..8).map(|_| bgp.get_or_fetch_connection("peer1"))).await;

    for result in &results {
        assert_eq!(result.as_ref().unwrap().remote_as, 65531);
    }
    assert_eq!(router.count(CONNECTION_PRINT).await, 1);

    let stats = bgp.cache_stats().await;
    assert_eq!(stats.connections_count, 1);
    assert!(stats.connections_valid);
}

#[tokio::test]
async fn batch_add_is_best_effort_and_positional() {
    let router = FakeRouter::new();
    router
        .seed("/routing/bgp/connection", &[("name", "taken")])
        .await;
    let bgp = router.client().new_bgp_batch_operations();

    let results = bgp
        .batch_add_connections(&[
            connection("peer1", 65001),
            connection("taken", 65002),
            connection("peer3", 65003),
        ])
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().name, "peer1");
    assert!(matches!(results[1], Err(AppError::Trap { .. })));
    assert_eq!(results[2].as_ref().unwrap().remote_as, 65003);

    // Successful adds are served from the cache without another print
    let prints = router.count(CONNECTION_PRINT).await;
    let cached = bgp.get_or_fetch_connection("peer3").await.unwrap();
    assert_eq!(cached.id, results[2].as_ref().unwrap().id);
    assert_eq!(router.count(CONNECTION_PRINT).await, prints);
    assert_eq!(bgp.cache_stats().await.connections_count, 2);
}

#[tokio::test]
async fn batch_update_refreshes_cached_connections() {
    let router = FakeRouter::new();
    let client = router.client();
    let bgp = client.new_bgp_batch_operations();

    let mut peer = client
        .add_bgp_connection(&connection("peer1", 65001))
        .await
        .unwrap();
    let before = bgp.get_or_fetch_connection("peer1").await.unwrap();
    assert_eq!(before.remote_as, 65001);

    peer.remote_as = 65100;
    let results = bgp
        .batch_update_connections(&[connection("no-id", 1), peer])
        .await;

    assert!(matches!(results[0], Err(AppError::MissingId { .. })));
    assert_eq!(results[1].as_ref().unwrap().remote_as, 65100);

    let after = bgp.get_or_fetch_connection("peer1").await.unwrap();
    assert_eq!(after.remote_as, 65100);
}

#[tokio::test]
async fn preload_fills_the_session_cache() {
    let router = FakeRouter::new();
    for name in ["peer1-1", "peer2-1", "peer3-1"] {
        router
            .seed("/routing/bgp/session", &[("name", name), ("established", "true")])
            .await;
    }
    let bgp = router.client().new_bgp_batch_operations();

    bgp.preload_all_sessions().await.unwrap();
    let stats = bgp.cache_stats().await;
    assert_eq!(stats.sessions_count, 3);
    assert!(stats.sessions_valid);
    assert!(!stats.connections_valid);

    let session = bgp.get_or_fetch_session("peer2-1").await.unwrap();
    assert!(session.established);
    assert_eq!(router.count(SESSION_PRINT).await, 1);

    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["sessions_count"], 3);
}

#[tokio::test]
async fn preload_failure_is_wrapped_and_keeps_the_cache() {
    let router = FakeRouter::new();
    router
        .seed("/routing/bgp/session", &[("name", "peer1-1")])
        .await;
    let bgp = router.client().new_bgp_batch_operations();
    bgp.preload_all_sessions().await.unwrap();

    router.set_offline(true);
    let err = bgp.preload_all_sessions().await.unwrap_err();
    assert!(matches!(err, AppError::Context { .. }));
    assert!(err.to_string().starts_with("failed to preload sessions"));
    assert_eq!(bgp.cache_stats().await.sessions_count, 1);
}

#[tokio::test]
async fn preload_of_an_empty_router_is_still_valid() {
    let router = FakeRouter::new();
    let bgp = router.client().new_bgp_batch_operations();

    bgp.preload_all_sessions().await.unwrap();
    let stats = bgp.cache_stats().await;
    assert_eq!(stats.sessions_count, 0);
    assert!(stats.sessions_valid);

    bgp.invalidate_cache().await;
    assert!(!bgp.cache_stats().await.sessions_valid);
}
