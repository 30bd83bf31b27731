// ABOUTME: Unified error type for remote calls issued by the gateway
// ABOUTME: One failure taxonomy covering transport, HTTP status, and decode errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! # Error Handling
//!
//! Every remote call fails in exactly one of three ways: the request never
//! completed ([`GatewayError::Transport`]), the backend answered with a
//! non-success status ([`GatewayError::Status`]), or the body could not be
//! decoded into the expected shape ([`GatewayError::Decode`]). The gateway
//! treats all three uniformly when capturing call state; the variants exist
//! so consuming code can render detail if it chooses to.
//!
//! Errors are `Clone` because a captured failure lives on in the owning
//! operation's call state after the call that produced it has returned.

use thiserror::Error;

/// Failure outcome of a single remote call
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request could not be sent or the connection failed mid-flight
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Full URL of the failed request
        url: String,
        /// Rendered transport error
        message: String,
    },

    /// The backend answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Full URL of the failed request
        url: String,
        /// HTTP status code of the response
        status: u16,
    },

    /// The response body could not be decoded into the expected record shape
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Full URL of the failed request
        url: String,
        /// Rendered decode error
        message: String,
    },
}

impl GatewayError {
    /// Transport-level failure (connect error, timeout, broken pipe)
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Non-success HTTP status
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Body decoding failure
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// The HTTP status code, if this failure carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// URL of the request that produced this failure
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
