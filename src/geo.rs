// ABOUTME: Stateless visitor geolocation lookup against the ipapi.co service
// ABOUTME: Isolated collaborator of the landing page, independent of gateway call state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! Coarse IP-based geolocation for the marketing landing page.
//!
//! A single stateless call against `https://ipapi.co/json`. It shares the
//! gateway's error type but none of its call state: the lookup has no
//! loading flag and no captured-error slot, and a failure here never
//! affects any gateway operation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::constants::defaults;
use crate::errors::{GatewayError, GatewayResult};
use crate::http_client::build_client;

/// Coarse location of the caller as reported by the lookup service
///
/// Every field except `ip` is optional; the service omits fields it cannot
/// resolve, and unknown fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Public IP address the lookup resolved
    pub ip: String,
    /// City name, if resolved
    pub city: Option<String>,
    /// Region or state name
    pub region: Option<String>,
    /// Country name
    pub country_name: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. `"Europe/Lisbon"`
    pub timezone: Option<String>,
    /// UTC offset in `±HHMM` form, e.g. `"+0100"`
    pub utc_offset: Option<String>,
}

/// Client for the IP geolocation lookup service
pub struct GeoLocator {
    client: Client,
    base_url: String,
}

impl GeoLocator {
    /// Locator against the public `ipapi.co` service
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(defaults::GEO_BASE_URL)
    }

    /// Locator against a custom service origin
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(&GatewayConfig::default()),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Look up the caller's coarse location
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the request fails, the service answers
    /// with a non-success status, or the body cannot be decoded.
    pub async fn lookup(&self) -> GatewayResult<GeoLocation> {
        let url = format!("{}/json", self.base_url);
        debug!(url = %url, "looking up visitor location");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::transport(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(&url, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::decode(&url, e.to_string()))
    }
}

impl Default for GeoLocator {
    fn default() -> Self {
        Self::new()
    }
}
