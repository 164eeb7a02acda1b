//! Packed vectors of 4-state logic values stored in simulator chunk layout.

use crate::logic::Logic;
use crate::vecval::{chunk_count, VecVal, BITS_PER_CHUNK};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vector of 4-state [`Logic`] values packed into [`VecVal`] chunks.
///
/// Bit `i` lives in chunk `i / 32` at bit position `i % 32`, so the storage
/// is exactly what a simulator expects for a `vpiVectorVal` of the same
/// width. Bits of the top chunk above `width` are always zero in both fields.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicVec {
    width: u32,
    chunks: Vec<VecVal>,
}

impl LogicVec {
    /// Creates a new `LogicVec` of the given width, initialized to all `Zero`.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            chunks: vec![VecVal::default(); chunk_count(width)],
        }
    }

    /// Creates a new `LogicVec` of the given width, initialized to all `X`.
    pub fn new_unknown(width: u32) -> Self {
        let mut v = Self {
            width,
            chunks: vec![VecVal::new(u32::MAX, u32::MAX); chunk_count(width)],
        };
        v.mask_top();
        v
    }

    /// Builds a vector of `width` bits from simulator chunks.
    ///
    /// Missing chunks read as zero; chunks beyond `chunk_count(width)` and
    /// bits of the top chunk above `width` are discarded.
    pub fn from_vecvals(width: u32, chunks: &[VecVal]) -> Self {
        let count = chunk_count(width);
        let mut data: Vec<VecVal> = chunks.iter().copied().take(count).collect();
        data.resize(count, VecVal::default());
        let mut v = Self {
            width,
            chunks: data,
        };
        v.mask_top();
        v
    }

    /// Returns the number of logic values in this vector.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the packed chunks, least significant first.
    pub fn as_vecvals(&self) -> &[VecVal] {
        &self.chunks
    }

    /// Gets the logic value at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn get(&self, index: u32) -> Logic {
        assert!(
            index < self.width,
            "index {index} out of bounds for width {}",
            self.width
        );
        let chunk = self.chunks[(index / BITS_PER_CHUNK) as usize];
        let bit = index % BITS_PER_CHUNK;
        Logic::from_ab((chunk.aval >> bit) & 1 != 0, (chunk.bval >> bit) & 1 != 0)
    }

    /// Sets the logic value at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn set(&mut self, index: u32, value: Logic) {
        assert!(
            index < self.width,
            "index {index} out of bounds for width {}",
            self.width
        );
        let chunk = &mut self.chunks[(index / BITS_PER_CHUNK) as usize];
        let bit = index % BITS_PER_CHUNK;
        let (a, b) = value.to_ab();
        let mask = !(1u32 << bit);
        chunk.aval = (chunk.aval & mask) | ((a as u32) << bit);
        chunk.bval = (chunk.bval & mask) | ((b as u32) << bit);
    }

    /// Creates a `LogicVec` from a `u64` value with the given width.
    ///
    /// Bits beyond the given width are ignored.
    pub fn from_u64(value: u64, width: u32) -> Self {
        let lo = VecVal::from_u32(value as u32);
        let hi = VecVal::from_u32((value >> 32) as u32);
        Self::from_vecvals(width, &[lo, hi])
    }

    /// Converts the `LogicVec` to a `u64`, if all bits are definite (0 or 1).
    ///
    /// Returns `None` if the vector contains X or Z values, or if the width
    /// exceeds 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.width > 64 || !self.is_two_state() {
            return None;
        }
        Some(
            self.chunks
                .iter()
                .rev()
                .fold(0u64, |acc, c| (acc << BITS_PER_CHUNK) | c.aval as u64),
        )
    }

    /// Returns true if no bit is X or Z.
    pub fn is_two_state(&self) -> bool {
        self.chunks.iter().all(|c| c.is_two_state())
    }

    /// Parses a binary string like `"10XZ"` into a `LogicVec`.
    ///
    /// The leftmost character is the most significant bit (highest index).
    /// Returns `None` if the string contains invalid characters.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let width = s.len() as u32;
        let mut v = Self::new(width);
        for (i, c) in s.chars().rev().enumerate() {
            let val = Logic::from_char(c)?;
            v.set(i as u32, val);
        }
        Some(v)
    }

    /// Parses a hex string into a `LogicVec`.
    ///
    /// Each hex digit represents 4 bits. Returns `None` if the string
    /// contains invalid hex characters.
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let width = (s.len() as u32) * 4;
        let mut v = Self::new(width);
        for (hex_idx, c) in s.chars().rev().enumerate() {
            let nibble = c.to_digit(16)?;
            let bit = (hex_idx as u32) * 4;
            v.chunks[(bit / BITS_PER_CHUNK) as usize].aval |= nibble << (bit % BITS_PER_CHUNK);
        }
        Some(v)
    }

    /// Clears the bits of the top chunk that lie above `width`.
    fn mask_top(&mut self) {
        let rem = self.width % BITS_PER_CHUNK;
        if rem == 0 {
            return;
        }
        if let Some(top) = self.chunks.last_mut() {
            let mask = (1u32 << rem) - 1;
            top.aval &= mask;
            top.bval &= mask;
        }
    }
}

impl fmt::Display for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.width).rev() {
            write!(f, "{}", self.get(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVec({self})")
    }
}
