// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Logged-in RouterOS sessions kept for reuse, one per `address:username`

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::connection::RouterOsConnection;
use crate::error::{AppError, Result};

/// Consecutive failures after which new dial attempts are refused for a while
const BACKOFF_AFTER_ERRORS: u32 = 3;

/// Backoff is `2^n` seconds with `n` capped here (256 s)
const MAX_BACKOFF_EXPONENT: u32 = 8;

/// Idle sessions older than this are closed instead of reused
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Sessions parked in the pool
    pub idle: usize,
    /// Sessions currently running a command
    pub checked_out: usize,
}

struct IdleConnection {
    connection: RouterOsConnection,
    parked_at: Instant,
}

/// Error history of one router login
#[derive(Debug, Clone, Default)]
struct Health {
    consecutive_errors: u32,
    last_error: Option<Instant>,
    last_success: Option<Instant>,
}

impl Health {
    fn succeeded(&mut self) {
        self.consecutive_errors = 0;
        self.last_success = Some(Instant::now());
    }

    fn failed(&mut self) {
        self.consecutive_errors = self.consecutive_errors.saturating_add(1);
        self.last_error = Some(Instant::now());
    }

    fn backoff(&self) -> Duration {
        Duration::from_secs(1u64 << self.consecutive_errors.min(MAX_BACKOFF_EXPONENT))
    }

    /// Remaining wait before the next dial is allowed, if any
    fn retry_after(&self) -> Option<Duration> {
        if self.consecutive_errors < BACKOFF_AFTER_ERRORS {
            return None;
        }
        let elapsed = self.last_error?.elapsed();
        self.backoff().checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}

fn pool_key(addr: &str, username: &str) -> String {
    format!("{addr}:{username}")
}

/// Shared by every client of a process; sessions are checked out for the
/// duration of one command
#[derive(Default)]
pub struct ConnectionPool {
    idle: Mutex<HashMap<String, IdleConnection>>,
    health: Mutex<HashMap<String, Health>>,
    checked_out: AtomicUsize,
}

impl ConnectionPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a parked session or dials and logs in a new one
    ///
    /// The session leaves the pool; hand it back with
    /// [`release_connection`](Self::release_connection) or drop it and call
    /// [`forget_connection`](Self::forget_connection).
    pub(super) async fn get_connection(
        &self,
        addr: &str,
        username: &str,
        password: &str,
    ) -> Result<RouterOsConnection> {
        let key = pool_key(addr, username);

        if let Some(health) = self.health.lock().await.get(&key) {
            if let Some(wait) = health.retry_after() {
                tracing::debug!(
                    "Not dialing {} for another {:?} after {} consecutive errors",
                    addr,
                    wait,
                    health.consecutive_errors
                );
                return Err(AppError::RouterOs(format!(
                    "Connection to {} temporarily disabled due to {} consecutive errors",
                    addr, health.consecutive_errors
                )));
            }
        }

        if let Some(parked) = self.idle.lock().await.remove(&key) {
            if parked.parked_at.elapsed() < IDLE_TIMEOUT {
                tracing::trace!("Reusing session for {}", key);
                self.checked_out.fetch_add(1, Ordering::Relaxed);
                return Ok(parked.connection);
            }
            tracing::debug!("Idle session for {} expired", key);
        }

        tracing::debug!("Opening RouterOS session to {} as {}", addr, username);
        let session = async {
            let mut conn = RouterOsConnection::connect(addr).await?;
            conn.login(username, password).await?;
            Ok::<_, AppError>(conn)
        }
        .await;

        match session {
            Ok(conn) => {
                self.record_success(addr, username).await;
                self.checked_out.fetch_add(1, Ordering::Relaxed);
                Ok(conn)
            }
            Err(e) => {
                tracing::debug!("Session to {} failed: {}", addr, e);
                self.record_error(addr, username).await;
                Err(e)
            }
        }
    }

    pub(super) async fn record_success(&self, addr: &str, username: &str) {
        self.health
            .lock()
            .await
            .entry(pool_key(addr, username))
            .or_default()
            .succeeded();
    }

    pub(super) async fn record_error(&self, addr: &str, username: &str) {
        let mut health = self.health.lock().await;
        let entry = health.entry(pool_key(addr, username)).or_default();
        entry.failed();
        tracing::trace!(
            "{} consecutive errors for {}",
            entry.consecutive_errors,
            addr
        );
    }

    /// Consecutive error count and whether the login ever succeeded
    pub async fn get_connection_state(&self, addr: &str, username: &str) -> Option<(u32, bool)> {
        self.health
            .lock()
            .await
            .get(&pool_key(addr, username))
            .map(|h| (h.consecutive_errors, h.last_success.is_some()))
    }

    pub async fn get_pool_stats(&self) -> PoolStats {
        PoolStats {
            idle: self.idle.lock().await.len(),
            checked_out: self.checked_out.load(Ordering::Relaxed),
        }
    }

    /// Parks a session that finished its command cleanly
    pub(super) async fn release_connection(
        &self,
        addr: &str,
        username: &str,
        conn: RouterOsConnection,
    ) {
        self.forget_connection();
        self.idle.lock().await.insert(
            pool_key(addr, username),
            IdleConnection {
                connection: conn,
                parked_at: Instant::now(),
            },
        );
    }

    /// Accounts for a checked-out session that was dropped instead of released
    pub(super) fn forget_connection(&self) {
        let _ = self
            .checked_out
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    /// Closes idle sessions past their timeout
    pub async fn cleanup(&self) {
        self.idle.lock().await.retain(|key, parked| {
            let keep = parked.parked_at.elapsed() < IDLE_TIMEOUT;
            if !keep {
                tracing::debug!("Closing idle session: {}", key);
            }
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTER: &str = "192.168.88.1:8728";

    #[test]
    fn test_health_backoff_grows_and_caps() {
        let mut health = Health::default();
        assert_eq!(health.backoff(), Duration::from_secs(1));

        health.failed();
        assert_eq!(health.backoff(), Duration::from_secs(2));

        for _ in 0..20 {
            health.failed();
        }
        assert_eq!(health.backoff(), Duration::from_secs(256));

        health.succeeded();
        assert_eq!(health.consecutive_errors, 0);
        assert!(health.last_success.is_some());
    }

    #[test]
    fn test_retry_after_needs_three_errors() {
        let mut health = Health::default();
        assert!(health.retry_after().is_none());

        health.failed();
        health.failed();
        assert!(health.retry_after().is_none());

        health.failed();
        let wait = health.retry_after().unwrap();
        assert!(wait <= Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_expires() {
        let mut health = Health::default();
        for _ in 0..3 {
            health.failed();
        }
        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(health.retry_after().is_none());
    }

    #[tokio::test]
    async fn test_pool_stats_empty() {
        let pool = ConnectionPool::new();
        assert_eq!(pool.get_pool_stats().await, PoolStats::default());

        pool.cleanup().await;
        assert_eq!(pool.get_pool_stats().await.idle, 0);
    }

    #[tokio::test]
    async fn test_forget_connection_never_underflows() {
        let pool = ConnectionPool::new();
        pool.forget_connection();
        assert_eq!(pool.get_pool_stats().await.checked_out, 0);
    }

    #[tokio::test]
    async fn test_get_connection_state() {
        let pool = ConnectionPool::new();
        assert!(pool.get_connection_state(ROUTER, "admin").await.is_none());

        pool.record_error(ROUTER, "admin").await;
        pool.record_error(ROUTER, "admin").await;
        assert_eq!(
            pool.get_connection_state(ROUTER, "admin").await,
            Some((2, false))
        );

        pool.record_success(ROUTER, "admin").await;
        assert_eq!(
            pool.get_connection_state(ROUTER, "admin").await,
            Some((0, true))
        );
    }

    #[tokio::test]
    async fn test_backoff_refuses_connection_without_dialing() {
        let pool = ConnectionPool::new();
        for _ in 0..3 {
            pool.record_error("10.255.255.1:8728", "admin").await;
        }
        let err = pool
            .get_connection("10.255.255.1:8728", "admin", "")
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("temporarily disabled"));
    }
}
