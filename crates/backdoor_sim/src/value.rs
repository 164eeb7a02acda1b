//! Signal identifiers and per-signal state held by the in-memory host.
//!
//! Each signal has a flat [`SimSignalId`] indexing the host's signal table,
//! a hierarchical name, a width, and its current four-state value.

use backdoor_common::LogicVec;
use serde::{Deserialize, Serialize};

/// Opaque ID for a signal in the host's flat signal table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SimSignalId(u32);

impl SimSignalId {
    /// Creates a `SimSignalId` from a raw index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// The runtime state of one signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimSignalState {
    /// Hierarchical name, e.g. `top.dut.regs.ctrl`.
    pub name: String,
    /// Bit width of this signal.
    pub width: u32,
    /// Current signal value.
    pub value: LogicVec,
    /// Number of backdoor deposits applied to this signal.
    pub deposits: u64,
}

impl SimSignalState {
    /// Creates a new signal state initialized to the given value.
    pub fn new(name: String, init_value: LogicVec) -> Self {
        Self {
            width: init_value.width(),
            value: init_value,
            name,
            deposits: 0,
        }
    }

    /// Creates a new signal state initialized to all-X (unknown).
    pub fn new_unknown(name: String, width: u32) -> Self {
        Self::new(name, LogicVec::new_unknown(width))
    }
}
