//! Cache geometry.
//!
//! Validates the three power-of-two parameters and derives the values needed
//! to split an address into tag, set index and line offset.

use serde::Serialize;

use crate::common::{ConfigError, PhysAddr};

/// Derived layout of a cache.
///
/// Every field is recomputed together on (re)configuration; a `Geometry`
/// value is never partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    /// Total capacity in bytes.
    pub size: u64,
    /// Bytes per line.
    pub line_size: u64,
    /// Ways per set.
    pub ways: usize,
    /// `size / (line_size * ways)`, always a power of two.
    pub sets: usize,
    /// `log2(line_size)`.
    pub line_size_log2: u32,
    /// `line_size_log2 + log2(sets)`.
    pub tag_shift: u32,
}

impl Geometry {
    /// Validates `size`, `line_size` and `assoc` and derives the set layout.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotPowerOfTwo` if any parameter is zero or not a power
    /// of two, `ConfigError::NoSets` if one set would not fit in `size`.
    pub fn new(size: u64, line_size: u64, assoc: u64) -> Result<Self, ConfigError> {
        check_pow2("size", size)?;
        check_pow2("block_size", line_size)?;
        check_pow2("assoc", assoc)?;

        let set_bytes = line_size
            .checked_mul(assoc)
            .filter(|&bytes| bytes <= size)
            .ok_or(ConfigError::NoSets {
                size,
                line_size,
                associativity: assoc,
            })?;

        let sets = size / set_bytes;
        let line_size_log2 = line_size.trailing_zeros();

        Ok(Self {
            size,
            line_size,
            ways: assoc as usize,
            sets: sets as usize,
            line_size_log2,
            tag_shift: line_size_log2 + sets.trailing_zeros(),
        })
    }

    /// Number of lines in the whole store.
    pub fn lines(&self) -> usize {
        self.sets * self.ways
    }

    /// Bits of the address above the index and offset fields.
    #[inline]
    pub fn tag_of(&self, addr: PhysAddr) -> u64 {
        addr.bits_above(self.tag_shift)
    }

    /// Set selected by the address.
    #[inline]
    pub fn index_of(&self, addr: PhysAddr) -> usize {
        (addr.bits_above(self.line_size_log2) & (self.sets as u64 - 1)) as usize
    }

    /// Reassembles the line-aligned address held by `tag` in set `index`.
    pub fn line_addr(&self, tag: u64, index: usize) -> PhysAddr {
        let high = tag.checked_shl(self.tag_shift).unwrap_or(0);
        PhysAddr::new(high | ((index as u64) << self.line_size_log2))
    }
}

fn check_pow2(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value.is_power_of_two() {
        Ok(())
    } else {
        Err(ConfigError::NotPowerOfTwo { field, value })
    }
}
