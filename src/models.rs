// ABOUTME: Wire-level data models exchanged with the forex price backend
// ABOUTME: Flat request/response records with serde serialization, no nesting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! # Data Models
//!
//! The two records the backend speaks. Both are flat mappings of named
//! fields to primitive values; the backend owns id assignment and
//! uniqueness, and the gateway performs no client-side validation beyond
//! parsing JSON into these shapes.

use serde::{Deserialize, Serialize};

/// A named quoted value, e.g. an exchange rate
///
/// Created by the backend on POST, read via GET, and replaced wholesale via
/// PUT: `id` and `name` are resupplied on update, never merged.
///
/// The `Default` value (`id: 0`, empty name, `0.0`) is what the lenient
/// [`crate::gateway::ApiGateway::get_price_by_id`] substitutes when a
/// lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Backend-assigned numeric identifier
    pub id: i64,
    /// Symbol or display name of the quote, e.g. `"EURUSD"`
    pub name: String,
    /// Quoted value
    pub value: f64,
}

impl PriceRecord {
    /// Create a record with the given fields
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }
}

/// Submission payload for both registration and login
///
/// The backend consumes this identically on `/register` and `/login`; the
/// response body is not modeled (fire-and-forget from the gateway's
/// perspective).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Client-side row id, ignored by the backend
    pub id: i64,
    /// Account name
    pub username: String,
    /// Plaintext password, forwarded as-is over the configured transport
    pub password: String,
}

impl Credentials {
    /// Create a credentials payload with `id` zeroed
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
        }
    }
}
