// ABOUTME: HTTP client construction with connection pooling for gateway calls
// ABOUTME: Builds a reqwest client from GatewayConfig timeouts and user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::warn;

use crate::config::GatewayConfig;

/// Build the pooled HTTP client for gateway calls
///
/// The client carries the configured whole-request and connection timeouts
/// plus the project User-Agent. Connection pooling is reqwest's default, so
/// one client per gateway instance is the intended usage.
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn build_client(config: &GatewayConfig) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap_or_else(|e| {
            warn!("failed to build configured HTTP client: {e}, using default");
            Client::new()
        })
}
