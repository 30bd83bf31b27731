// ABOUTME: Structured logging setup for the gateway and its binaries
// ABOUTME: tracing-subscriber fmt output with RUST_LOG-aware filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! Logging initialization.
//!
//! `RUST_LOG` wins when set; otherwise the supplied default level applies
//! to this crate and its dependencies alike.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
