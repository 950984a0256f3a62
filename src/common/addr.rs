//! Physical address wrapper.
//!
//! The cache model indexes on physical addresses only. `PhysAddr` keeps the
//! raw value typed so that tag and index extraction cannot be confused with
//! the values they produce.

use std::fmt;

/// A 64-bit physical address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(u64);

impl PhysAddr {
    /// Wraps a raw address value.
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the bits above `shift`, wrapping to zero for shifts of the
    /// full address width.
    pub fn bits_above(self, shift: u32) -> u64 {
        self.0.checked_shr(shift).unwrap_or(0)
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
