// ABOUTME: Shared test utilities: an in-process stub of the forex price backend
// ABOUTME: Axum router over an in-memory store, with optional injected latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]

//! Shared test utilities for `forex_gateway`
//!
//! The stub backend implements the six routes the gateway speaks, backed by
//! an in-memory store the tests can seed and inspect directly. An optional
//! per-request latency makes in-flight call state observable.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use forex_gateway::config::GatewayConfig;
use forex_gateway::gateway::ApiGateway;
use forex_gateway::models::{Credentials, PriceRecord};

#[derive(Default)]
struct StubState {
    prices: Mutex<Vec<PriceRecord>>,
    users: Mutex<Vec<Credentials>>,
    latency: Duration,
}

impl StubState {
    async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

/// In-process stub of the forex price backend
pub struct StubBackend {
    base_url: String,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubBackend {
    /// Spawn a stub answering immediately
    pub async fn spawn() -> Self {
        Self::spawn_with_latency(Duration::ZERO).await
    }

    /// Spawn a stub that sleeps before answering each request
    pub async fn spawn_with_latency(latency: Duration) -> Self {
        let state = Arc::new(StubState {
            latency,
            ..StubState::default()
        });

        let app = Router::new()
            .route("/forex_price", post(create_price).get(list_prices))
            .route("/forex_price/:id", get(get_price).put(update_price))
            .route("/register", post(register))
            .route("/login", post(login))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
            server,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gateway instance pointed at this stub
    pub fn gateway(&self) -> ApiGateway {
        let config = GatewayConfig::with_base_url(&self.base_url).unwrap();
        ApiGateway::with_config(&config)
    }

    /// Insert a record directly into the store, bypassing HTTP
    pub fn seed_price(&self, record: PriceRecord) {
        self.state.prices.lock().unwrap().push(record);
    }

    /// Snapshot of the stored price records
    pub fn stored_prices(&self) -> Vec<PriceRecord> {
        self.state.prices.lock().unwrap().clone()
    }

    /// Snapshot of the registered users
    pub fn registered_users(&self) -> Vec<Credentials> {
        self.state.users.lock().unwrap().clone()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn create_price(
    State(state): State<Arc<StubState>>,
    Json(record): Json<PriceRecord>,
) -> StatusCode {
    state.pause().await;
    state.prices.lock().unwrap().push(record);
    StatusCode::CREATED
}

async fn list_prices(State(state): State<Arc<StubState>>) -> Json<Vec<PriceRecord>> {
    state.pause().await;
    let prices = state.prices.lock().unwrap().clone();
    Json(prices)
}

async fn get_price(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> Result<Json<PriceRecord>, StatusCode> {
    state.pause().await;
    let prices = state.prices.lock().unwrap();
    prices
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_price(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(replacement): Json<PriceRecord>,
) -> StatusCode {
    state.pause().await;
    let mut prices = state.prices.lock().unwrap();
    match prices.iter_mut().find(|record| record.id == id) {
        Some(slot) => {
            // Full replacement, never a merge
            *slot = replacement;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn register(
    State(state): State<Arc<StubState>>,
    Json(credentials): Json<Credentials>,
) -> StatusCode {
    state.pause().await;
    state.users.lock().unwrap().push(credentials);
    StatusCode::OK
}

async fn login(
    State(state): State<Arc<StubState>>,
    Json(credentials): Json<Credentials>,
) -> StatusCode {
    state.pause().await;
    let users = state.users.lock().unwrap();
    let known = users
        .iter()
        .any(|u| u.username == credentials.username && u.password == credentials.password);
    if known {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}
