//! The 32-bit two-field chunk exchanged with simulators, and its encodings.
//!
//! A four-state vector crosses the VPI/DPI boundary as a sequence of
//! [`VecVal`] chunks, least significant chunk first. Each bit position `i`
//! of a chunk is described by bit `i` of `aval` and bit `i` of `bval`:
//!
//! ```text
//! aval bval | value
//!   0    0  |  0
//!   1    0  |  1
//!   0    1  |  Z
//!   1    1  |  X
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of bits carried by one [`VecVal`] chunk.
pub const BITS_PER_CHUNK: u32 = 32;

/// One 32-bit chunk of a four-state vector.
///
/// Layout-compatible with `s_vpi_vecval` (IEEE 1364) and `svLogicVecVal`
/// (IEEE 1800), so slices of it can be handed to a simulator directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct VecVal {
    /// The "A" field: value bits.
    pub aval: u32,
    /// The "B" field: unknown/high-impedance bits.
    pub bval: u32,
}

impl VecVal {
    /// Creates a chunk from its two fields.
    pub const fn new(aval: u32, bval: u32) -> Self {
        Self { aval, bval }
    }

    /// Creates a fully two-state chunk holding `value`.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            aval: value,
            bval: 0,
        }
    }

    /// Returns the chunk with its `aval` and `bval` fields exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            aval: self.bval,
            bval: self.aval,
        }
    }

    /// Returns true if no bit of the chunk is X or Z.
    pub const fn is_two_state(self) -> bool {
        self.bval == 0
    }
}

impl fmt::Debug for VecVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VecVal {{ a: {:#010x}, b: {:#010x} }}", self.aval, self.bval)
    }
}

/// Returns the number of chunks needed to hold a signal of `width` bits.
pub fn chunk_count(width: u32) -> usize {
    width.div_ceil(BITS_PER_CHUNK) as usize
}

/// How a host simulator lays out the two fields of a chunk relative to the
/// testbench (DPI) convention.
///
/// Most simulators use the same convention on both sides. Some vendors
/// report and accept VPI vectors with `aval` and `bval` exchanged, which the
/// bridge compensates for by swapping every chunk on the way in and out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkEncoding {
    /// Host and testbench agree on the field layout.
    #[default]
    Native,
    /// Host exchanges `aval` and `bval` relative to the testbench.
    Swapped,
}

impl ChunkEncoding {
    /// Converts one chunk between testbench and host layout.
    ///
    /// The conversion is its own inverse, so the same call is used in both
    /// directions.
    pub fn convert(self, chunk: VecVal) -> VecVal {
        match self {
            ChunkEncoding::Native => chunk,
            ChunkEncoding::Swapped => chunk.swapped(),
        }
    }
}

impl fmt::Display for ChunkEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkEncoding::Native => write!(f, "native"),
            ChunkEncoding::Swapped => write!(f, "swapped"),
        }
    }
}

/// Error returned when a string does not name a [`ChunkEncoding`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chunk encoding '{0}' (expected 'native' or 'swapped')")]
pub struct ParseEncodingError(pub String);

impl FromStr for ChunkEncoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(ChunkEncoding::Native),
            "swapped" => Ok(ChunkEncoding::Swapped),
            _ => Err(ParseEncodingError(s.to_string())),
        }
    }
}
