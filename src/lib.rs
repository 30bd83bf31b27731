// ABOUTME: Library entry point for the forex-gateway remote-call crate
// ABOUTME: Exposes the gateway, its call-state types, models, config, and geo lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

#![deny(unsafe_code)]

//! # Forex Gateway
//!
//! A typed, stateful remote-call gateway for the forex price backend: six
//! named operations (price CRUD plus register/login submission), each
//! wrapped with per-operation loading/error lifecycle tracking.
//!
//! ## Design
//!
//! - **Per-operation call state**: every operation owns its own
//!   `{phase, error}` record, so independent operations never race on a
//!   shared flag.
//! - **Two calling surfaces**: a lenient one that captures failures into
//!   call state and substitutes safe defaults, and a strict `try_*` one
//!   returning [`errors::GatewayResult`] for ordinary error handling.
//! - **Typed boundary**: request and response bodies are concrete serde
//!   records; JSON is parsed against them before any field is trusted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use forex_gateway::call_state::Operation;
//! use forex_gateway::gateway::ApiGateway;
//! use forex_gateway::models::PriceRecord;
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = ApiGateway::new();
//!
//!     gateway.create_price(&PriceRecord::new(1, "EURUSD", 1.08)).await;
//!     let prices = gateway.list_prices().await;
//!
//!     if let Some(error) = gateway.last_error(Operation::ListPrices) {
//!         eprintln!("listing failed: {error}");
//!     } else {
//!         println!("{} quotes", prices.len());
//!     }
//! }
//! ```

/// Per-operation call lifecycle tracking
pub mod call_state;
/// Gateway configuration from defaults or environment
pub mod config;
/// Route paths, env var names, and configuration defaults
pub mod constants;
/// Unified remote-call error type
pub mod errors;
/// Stateless visitor geolocation lookup
pub mod geo;
/// Logging initialization
pub mod logging;
/// Wire-level data models
pub mod models;

/// The remote-call gateway itself
pub mod gateway;

/// HTTP client construction
pub mod http_client;

// Re-export the types nearly every consumer touches
pub use call_state::{CallPhase, Operation};
pub use errors::{GatewayError, GatewayResult};
pub use gateway::ApiGateway;
pub use models::{Credentials, PriceRecord};
