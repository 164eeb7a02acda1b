//! In-memory reference host for the backdoor signal bridge.
//!
//! [`MemoryHost`] stands in for a simulator: it owns a flat table of named
//! signals and integer parameters, answers [`SimHost`](backdoor_bridge::SimHost)
//! queries, and counts every lookup and value access so callers can verify
//! that a rejected backdoor operation never touched a value.
//!
//! # Usage
//!
//! ```ignore
//! use backdoor_bridge::SignalBridge;
//! use backdoor_sim::MemoryHost;
//!
//! let mut host = MemoryHost::new();
//! host.add_signal("top.dut.ctrl", 8)?;
//! SignalBridge::default().write_logic(&mut host, "top.dut.ctrl", &value)?;
//! ```
//!
//! # Modules
//!
//! - `error` — Host construction and deposit errors
//! - `value` — Signal identifiers and per-signal state
//! - `host` — The [`MemoryHost`] table and its `SimHost` implementation

#![warn(missing_docs)]

pub mod error;
pub mod host;
pub mod value;

pub use error::HostError;
pub use host::{HostHandle, HostStats, MemoryHost};
pub use value::{SimSignalId, SimSignalState};
