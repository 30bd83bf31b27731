// ABOUTME: Gateway configuration from defaults or environment variables
// ABOUTME: Validates the backend origin and carries HTTP client timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! Environment-based configuration for the gateway.
//!
//! Everything has a working default so a bare `GatewayConfig::default()`
//! talks to the reference deployment on `http://localhost:8080`.

use anyhow::{bail, Context, Result};
use std::env;
use url::Url;

use crate::constants::{defaults, env_vars, project};

/// Configuration for an [`crate::gateway::ApiGateway`] instance
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend origin, without a trailing slash
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// User-Agent header attached to every outbound request
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_owned(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
            user_agent: project::user_agent(),
        }
    }
}

impl GatewayConfig {
    /// Configuration pointing at the given backend origin, defaults elsewhere
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid http(s) URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = validate_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Load configuration from the environment
    ///
    /// Reads `GATEWAY_BASE_URL`, `GATEWAY_REQUEST_TIMEOUT_SECS`, and
    /// `GATEWAY_CONNECT_TIMEOUT_SECS`, falling back to defaults for
    /// anything unset or unparsable (except the base URL, which must be a
    /// valid http(s) URL when present).
    ///
    /// # Errors
    ///
    /// Returns an error if `GATEWAY_BASE_URL` is set but not a valid
    /// http(s) URL.
    pub fn from_env() -> Result<Self> {
        let base_url = match env::var(env_vars::BASE_URL) {
            Ok(raw) => validate_base_url(&raw)?,
            Err(_) => defaults::BASE_URL.to_owned(),
        };

        Ok(Self {
            base_url,
            request_timeout_secs: env_u64(
                env_vars::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            ),
            connect_timeout_secs: env_u64(
                env_vars::CONNECT_TIMEOUT_SECS,
                defaults::CONNECT_TIMEOUT_SECS,
            ),
            user_agent: project::user_agent(),
        })
    }
}

/// Parse a u64 environment variable with a default fallback
fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Validate the backend origin and strip any trailing slash
fn validate_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).with_context(|| format!("invalid backend base URL: {raw}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("backend base URL must be http or https, got: {raw}");
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
