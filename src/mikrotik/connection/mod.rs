// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Low-level RouterOS API connection handling

mod auth;
mod protocol;

use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::{AppError, Result};
use crate::mikrotik::reply::Reply;

pub use protocol::{encode_length, read_reply, write_sentence};

/// Connection timeout (5 seconds)
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Read operation timeout (30 seconds)
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level RouterOS API connection
pub(super) struct RouterOsConnection {
    stream: TcpStream,
}

impl RouterOsConnection {
    pub(super) async fn connect(addr: &str) -> Result<Self> {
        tracing::trace!("Attempting TCP connection to: {}", addr);
        let stream = timeout(CONNECTION_TIMEOUT, TcpStream::connect(addr))
            .await
            .map_err(|_| AppError::RouterOs(format!("Connection timeout: {addr}")))??;
        stream.set_nodelay(true)?;
        tracing::trace!("TCP connection established to: {}", addr);
        Ok(Self { stream })
    }

    /// Sends one command sentence and waits for the complete reply
    pub(super) async fn run(&mut self, words: &[String]) -> Result<Reply> {
        if let Some(path) = words.first() {
            tracing::trace!("Sending command: {} ({} args)", path, words.len() - 1);
        }
        write_sentence(&mut self.stream, words).await?;
        // Wrap the entire read operation in a timeout to prevent hanging on slow/dead connections
        timeout(READ_TIMEOUT, read_reply(&mut self.stream))
            .await
            .map_err(|_| {
                AppError::RouterOs(
                    "Read timeout: RouterOS did not respond within 30 seconds".to_string(),
                )
            })?
    }
}
