// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! RouterOS authentication

use md5::compute as md5_compute;

use super::RouterOsConnection;
use crate::error::{AppError, Result};

/// Response to the legacy challenge: `00` followed by md5(0x00 + password + challenge)
pub(crate) fn challenge_response(password: &str, challenge: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + password.len() + challenge.len());
    data.push(0u8);
    data.extend_from_slice(password.as_bytes());
    data.extend_from_slice(challenge);
    let digest = md5_compute(&data);
    let mut response = String::from("00");
    response.push_str(&hex::encode(digest.0));
    response
}

impl RouterOsConnection {
    pub(crate) async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        tracing::trace!("Attempting login for user: {}", username);
        // Try new login method first (RouterOS 6.43+)
        let login_result = self
            .run(&[
                "/login".to_string(),
                format!("=name={username}"),
                format!("=password={password}"),
            ])
            .await;

        match login_result {
            Ok(reply) => match reply.ret() {
                // Pre-6.43 routers answer a plain login with a challenge
                Some(challenge_hex) => {
                    tracing::debug!("Router requested legacy challenge login");
                    let challenge_hex = challenge_hex.to_string();
                    return self.legacy_login(username, password, &challenge_hex).await;
                }
                None => {
                    tracing::debug!("Login successful (new method)");
                    return Ok(());
                }
            },
            Err(AppError::Trap { message, .. }) => {
                tracing::trace!("Login failed with message: {}", message);
                return Err(AppError::RouterOs(format!("Login failed: {message}")));
            }
            Err(e) => {
                tracing::debug!("New login method failed, trying legacy method: {}", e);
            }
        }

        // Fallback to legacy challenge-response method (pre-6.43)
        tracing::trace!("Requesting challenge for legacy login");
        let reply = self.run(&["/login".to_string()]).await?;
        let challenge_hex = reply
            .ret()
            .ok_or_else(|| AppError::RouterOs("No challenge 'ret' received".to_string()))?
            .to_string();
        self.legacy_login(username, password, &challenge_hex).await
    }

    async fn legacy_login(
        &mut self,
        username: &str,
        password: &str,
        challenge_hex: &str,
    ) -> Result<()> {
        tracing::trace!("Challenge received, length: {}", challenge_hex.len());
        let challenge = hex::decode(challenge_hex)
            .map_err(|e| AppError::RouterOs(format!("Invalid login challenge: {e}")))?;
        let response = challenge_response(password, &challenge);

        let reply = self
            .run(&[
                "/login".to_string(),
                format!("=name={username}"),
                format!("=response={response}"),
            ])
            .await
            .map_err(|e| match e {
                AppError::Trap { message, .. } => {
                    AppError::RouterOs(format!("Login failed: {message}"))
                }
                other => other,
            })?;
        // If no !trap assume success
        if let Some(message) = reply.done.get("message") {
            tracing::warn!("Login message: {}", message);
        }
        tracing::debug!("Login successful (legacy method)");
        Ok(())
    }
}
