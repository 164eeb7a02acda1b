//! Shared foundational types used across the HDL backdoor crates.
//!
//! This crate provides 4-state logic values, packed logic vectors, and the
//! 32-bit two-field chunk ([`VecVal`]) that simulators exchange across the
//! VPI/DPI boundary, together with the chunk encoding conventions.

#![warn(missing_docs)]

pub mod logic;
pub mod logic_vec;
pub mod vecval;

pub use logic::Logic;
pub use logic_vec::LogicVec;
pub use vecval::{chunk_count, ChunkEncoding, ParseEncodingError, VecVal, BITS_PER_CHUNK};
