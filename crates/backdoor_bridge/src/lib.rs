//! Backdoor access to simulator signals by hierarchical path.
//!
//! A testbench hands the bridge a path such as `top.dut.regs.ctrl` and a
//! buffer of 32-bit [`VecVal`](backdoor_common::VecVal) chunks. The bridge
//! resolves the path through a [`SimHost`], checks the signal width against
//! the resolved [`AccessLimits`], converts each chunk between testbench and
//! host field layout, and pushes or pulls the value with no scheduling delay.
//!
//! # Usage
//!
//! ```ignore
//! use backdoor_bridge::SignalBridge;
//! use backdoor_common::{ChunkEncoding, VecVal};
//!
//! let bridge = SignalBridge::new(ChunkEncoding::Native);
//! bridge.write(&mut host, "top.dut.ctrl", &[VecVal::from_u32(0x5)])?;
//! let mut out = [VecVal::default()];
//! bridge.read(&host, "top.dut.ctrl", &mut out)?;
//! ```
//!
//! # Modules
//!
//! - `error` — Error kinds and the fatal diagnostic text
//! - `host` — The [`SimHost`] trait implemented by simulator back ends
//! - `limits` — Maximum-width resolution
//! - `bridge` — The [`SignalBridge`] check/read/write operations
//! - `dpi` — Raw-pointer argument handling for the exported DPI-C functions

#![warn(missing_docs)]

pub mod bridge;
pub mod dpi;
pub mod error;
pub mod host;
pub mod limits;

#[cfg(test)]
mod testing;

pub use bridge::SignalBridge;
pub use error::BackdoorError;
pub use host::SimHost;
pub use limits::{AccessLimits, WidthSource};
