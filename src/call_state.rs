// ABOUTME: Per-operation call lifecycle tracking (idle, in-flight, settled)
// ABOUTME: Each named operation owns its own loading flag and last-error slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forex Gateway Project

//! # Call State
//!
//! Each of the gateway's named operations carries its own `{phase, error}`
//! record. Giving every operation an independent record means two
//! operations in flight at once never race on a shared flag; observers
//! always read the state of the operation they ask about.
//!
//! Transition law, per operation:
//!
//! - invocation: `Idle`/`Settled` → `InFlight`, synchronously, before the
//!   request is issued. The stored error is untouched until settlement.
//! - settlement: `InFlight` → `Settled`. A failure replaces the stored
//!   error; a success clears it, so a stale error never outlives the next
//!   settled call of the same operation.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::errors::GatewayError;

/// The six named remote operations the gateway exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// POST a new price record
    CreatePrice,
    /// GET the full ordered price collection
    ListPrices,
    /// GET a single price record by id
    GetPriceById,
    /// PUT a full replacement for an existing record
    UpdatePrice,
    /// POST a registration submission
    Register,
    /// POST a login submission
    Login,
}

impl Operation {
    /// All operations, in declaration order
    pub const ALL: [Self; 6] = [
        Self::CreatePrice,
        Self::ListPrices,
        Self::GetPriceById,
        Self::UpdatePrice,
        Self::Register,
        Self::Login,
    ];

    /// Stable snake_case name, used in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreatePrice => "create_price",
            Self::ListPrices => "list_prices",
            Self::GetPriceById => "get_price_by_id",
            Self::UpdatePrice => "update_price",
            Self::Register => "register",
            Self::Login => "login",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle phase of a single operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallPhase {
    /// No call of this operation has been issued yet
    #[default]
    Idle,
    /// A call is between issue and settlement
    InFlight,
    /// The last call has settled, successfully or not
    Settled,
}

#[derive(Debug, Default)]
struct CallSlot {
    phase: CallPhase,
    error: Option<GatewayError>,
}

/// One `{phase, error}` record per operation
///
/// Locks guard individual slots and are held only for the duration of a
/// field read or write, never across an await point.
#[derive(Debug, Default)]
pub(crate) struct CallRegistry {
    slots: [RwLock<CallSlot>; 6],
}

impl CallRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn write(&self, op: Operation) -> std::sync::RwLockWriteGuard<'_, CallSlot> {
        self.slots[op.index()]
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self, op: Operation) -> std::sync::RwLockReadGuard<'_, CallSlot> {
        self.slots[op.index()]
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark an operation in flight. The stored error is left as-is.
    pub(crate) fn begin(&self, op: Operation) {
        self.write(op).phase = CallPhase::InFlight;
    }

    /// Settle an operation successfully, clearing its stored error
    pub(crate) fn settle_ok(&self, op: Operation) {
        let mut slot = self.write(op);
        slot.phase = CallPhase::Settled;
        slot.error = None;
    }

    /// Settle an operation with a captured failure
    pub(crate) fn settle_err(&self, op: Operation, error: GatewayError) {
        let mut slot = self.write(op);
        slot.phase = CallPhase::Settled;
        slot.error = Some(error);
    }

    pub(crate) fn phase(&self, op: Operation) -> CallPhase {
        self.read(op).phase
    }

    pub(crate) fn is_loading(&self, op: Operation) -> bool {
        self.phase(op) == CallPhase::InFlight
    }

    pub(crate) fn last_error(&self, op: Operation) -> Option<GatewayError> {
        self.read(op).error.clone()
    }
}
