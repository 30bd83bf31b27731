// ABOUTME: Remote-call gateway centralizing the six named backend operations
// ABOUTME: Wraps each HTTP round-trip with per-operation loading/error tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! # Remote-Call Gateway
//!
//! [`ApiGateway`] provides a uniform calling convention over six remote
//! operations against a single backend origin. Every operation marks its
//! own call state in-flight before issuing the request and settled on both
//! exit paths, so the loading flag is released whether the call succeeds
//! or fails.
//!
//! Two surfaces are exposed per operation:
//!
//! - the **lenient** surface (`create_price`, `list_prices`, …) never
//!   propagates a failure. Errors are captured into the operation's call
//!   state, and the collection/lookup operations substitute a safe default
//!   (`Vec::new()`, [`PriceRecord::default`]) so calling code can proceed
//!   without null-checking. Failure is observed by inspecting
//!   [`ApiGateway::last_error`] after the call returns.
//! - the **strict** surface (`try_create_price`, `try_list_prices`, …)
//!   returns a [`GatewayResult`] so callers can handle the outcome with
//!   ordinary control flow. Call state is recorded identically.
//!
//! ## Concurrency
//!
//! Call state is tracked per operation, so two *different* operations in
//! flight on one gateway never race on a shared flag. Two concurrent calls
//! of the *same* operation share that operation's record with
//! last-settled-wins semantics; callers that need per-call attribution
//! should serialize calls of a given operation or use the strict surface.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

use crate::call_state::{CallPhase, CallRegistry, Operation};
use crate::config::GatewayConfig;
use crate::constants::routes;
use crate::errors::{GatewayError, GatewayResult};
use crate::http_client::build_client;
use crate::models::{Credentials, PriceRecord};

/// Gateway to the forex price backend
///
/// Owns the pooled HTTP client, the backend origin, and one call-state
/// record per operation. Cheap to share behind an `Arc`; all methods take
/// `&self`.
pub struct ApiGateway {
    client: Client,
    base_url: String,
    calls: CallRegistry,
}

impl ApiGateway {
    /// Gateway against the default backend origin (`http://localhost:8080`)
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GatewayConfig::default())
    }

    /// Gateway built from the given configuration
    #[must_use]
    pub fn with_config(config: &GatewayConfig) -> Self {
        Self {
            client: build_client(config),
            base_url: config.base_url.clone(),
            calls: CallRegistry::new(),
        }
    }

    /// Gateway built from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `GATEWAY_BASE_URL` is set but invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::with_config(&GatewayConfig::from_env()?))
    }

    /// The backend origin this gateway talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Call-state observers ────────────────────────────────────────────

    /// Whether a call of `op` is currently between issue and settlement
    #[must_use]
    pub fn is_loading(&self, op: Operation) -> bool {
        self.calls.is_loading(op)
    }

    /// Lifecycle phase of `op`
    #[must_use]
    pub fn phase(&self, op: Operation) -> CallPhase {
        self.calls.phase(op)
    }

    /// The captured failure from the last settled call of `op`, if any
    ///
    /// Cleared by a successful settlement of the same operation; untouched
    /// by calls of other operations.
    #[must_use]
    pub fn last_error(&self, op: Operation) -> Option<GatewayError> {
        self.calls.last_error(op)
    }

    // ── Strict surface ──────────────────────────────────────────────────

    /// Create a price record via `POST /forex_price`
    ///
    /// The backend may ignore the supplied `id` and assign its own. No
    /// response body is consumed.
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure.
    pub async fn try_create_price(&self, record: &PriceRecord) -> GatewayResult<()> {
        let url = self.collection_url();
        self.tracked(
            Operation::CreatePrice,
            self.send_expect_success(self.client.post(&url).json(record), &url),
        )
        .await
    }

    /// Fetch the full ordered price collection via `GET /forex_price`
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure.
    pub async fn try_list_prices(&self) -> GatewayResult<Vec<PriceRecord>> {
        let url = self.collection_url();
        self.tracked(Operation::ListPrices, self.get_json(&url)).await
    }

    /// Fetch a single price record via `GET /forex_price/{id}`
    ///
    /// `id` is forwarded as given; the gateway performs no range checking.
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure (a missing record surfaces as a status 404 failure).
    pub async fn try_get_price_by_id(&self, id: i64) -> GatewayResult<PriceRecord> {
        let url = self.record_url(id);
        self.tracked(Operation::GetPriceById, self.get_json(&url)).await
    }

    /// Replace a price record wholesale via `PUT /forex_price/{id}`
    ///
    /// The payload resupplies every field, `id` and `name` included; the
    /// backend applies a full replacement, not a merge.
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure.
    pub async fn try_update_price(&self, id: i64, record: &PriceRecord) -> GatewayResult<()> {
        let url = self.record_url(id);
        self.tracked(
            Operation::UpdatePrice,
            self.send_expect_success(self.client.put(&url).json(record), &url),
        )
        .await
    }

    /// Submit a registration via `POST /register`
    ///
    /// Fire-and-forget: no response body is consumed and no session or
    /// token state is retained.
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure.
    pub async fn try_register(&self, credentials: &Credentials) -> GatewayResult<()> {
        let url = format!("{}{}", self.base_url, routes::REGISTER);
        self.tracked(
            Operation::Register,
            self.send_expect_success(self.client.post(&url).json(credentials), &url),
        )
        .await
    }

    /// Submit a login via `POST /login`
    ///
    /// Fire-and-forget, like [`Self::try_register`].
    ///
    /// # Errors
    ///
    /// Returns the captured [`GatewayError`] on transport, status, or
    /// decode failure.
    pub async fn try_login(&self, credentials: &Credentials) -> GatewayResult<()> {
        let url = format!("{}{}", self.base_url, routes::LOGIN);
        self.tracked(
            Operation::Login,
            self.send_expect_success(self.client.post(&url).json(credentials), &url),
        )
        .await
    }

    // ── Lenient surface ─────────────────────────────────────────────────

    /// Create a price record, capturing any failure into call state
    pub async fn create_price(&self, record: &PriceRecord) {
        let _ = self.try_create_price(record).await;
    }

    /// Fetch the price collection, or an empty vec on failure
    ///
    /// A failure is still captured into call state; inspect
    /// [`Self::last_error`] for [`Operation::ListPrices`] to distinguish an
    /// empty backend from a failed call.
    pub async fn list_prices(&self) -> Vec<PriceRecord> {
        self.try_list_prices().await.unwrap_or_default()
    }

    /// Fetch a single price record, or [`PriceRecord::default`] on failure
    pub async fn get_price_by_id(&self, id: i64) -> PriceRecord {
        self.try_get_price_by_id(id).await.unwrap_or_default()
    }

    /// Replace a price record, capturing any failure into call state
    pub async fn update_price(&self, id: i64, record: &PriceRecord) {
        let _ = self.try_update_price(id, record).await;
    }

    /// Submit a registration, capturing any failure into call state
    pub async fn register(&self, credentials: &Credentials) {
        let _ = self.try_register(credentials).await;
    }

    /// Submit a login, capturing any failure into call state
    pub async fn login(&self, credentials: &Credentials) {
        let _ = self.try_login(credentials).await;
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, routes::FOREX_PRICE)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{}/{id}", self.base_url, routes::FOREX_PRICE)
    }

    /// Run one remote call with call-state bookkeeping around it
    ///
    /// The in-flight mark happens synchronously before the future is
    /// polled; settlement happens on both exit paths.
    async fn tracked<T, F>(&self, op: Operation, call: F) -> GatewayResult<T>
    where
        F: Future<Output = GatewayResult<T>>,
    {
        self.calls.begin(op);
        debug!(operation = %op, "issuing remote call");

        let result = call.await;
        match &result {
            Ok(_) => self.calls.settle_ok(op),
            Err(e) => {
                warn!(operation = %op, error = %e, "remote call failed");
                self.calls.settle_err(op, e.clone());
            }
        }
        result
    }

    /// GET a JSON body and decode it into `T`
    async fn get_json<T>(&self, url: &str) -> GatewayResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(url, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::decode(url, e.to_string()))
    }

    /// Send a request whose response body is not consumed
    async fn send_expect_success(&self, request: RequestBuilder, url: &str) -> GatewayResult<()> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::transport(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(url, status.as_u16()));
        }
        Ok(())
    }
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new()
    }
}
