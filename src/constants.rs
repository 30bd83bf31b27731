// ABOUTME: Application constants organized by domain (routes, env vars, defaults)
// ABOUTME: Single source of truth for endpoint paths and configuration fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! Constants module
//!
//! Constants are grouped into small domain modules rather than scattered
//! through the code that uses them.

/// Backend route paths, relative to the configured base URL
pub mod routes {
    /// Forex price collection resource (POST to create, GET to list)
    pub const FOREX_PRICE: &str = "/forex_price";
    /// Registration submission endpoint
    pub const REGISTER: &str = "/register";
    /// Login submission endpoint
    pub const LOGIN: &str = "/login";
}

/// Environment variable names read by [`crate::config::GatewayConfig::from_env`]
pub mod env_vars {
    /// Backend origin override
    pub const BASE_URL: &str = "GATEWAY_BASE_URL";
    /// Whole-request timeout override, in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "GATEWAY_REQUEST_TIMEOUT_SECS";
    /// Connection timeout override, in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "GATEWAY_CONNECT_TIMEOUT_SECS";
}

/// Configuration defaults used when the environment provides nothing
pub mod defaults {
    /// Backend origin of the reference deployment
    pub const BASE_URL: &str = "http://localhost:8080";
    /// Default whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Origin of the third-party geolocation lookup service
    pub const GEO_BASE_URL: &str = "https://ipapi.co";
}

/// Project metadata constants
pub mod project {
    /// Project name
    pub const NAME: &str = env!("CARGO_PKG_NAME");
    /// Project version (synced from Cargo.toml at compile time)
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Builds the HTTP User-Agent string for outbound requests
    ///
    /// Format: `forex-gateway/{version}`
    #[must_use]
    pub fn user_agent() -> String {
        format!("{NAME}/{VERSION}")
    }
}
