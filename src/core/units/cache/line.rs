//! Cache line metadata.

use serde::Serialize;

/// One way of one set.
///
/// Holds tag presence and recency only; line contents are not modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheLine {
    pub tag: u64,
    pub valid: bool,
    pub recently_used: bool,
}

impl CacheLine {
    /// An invalid, untagged, not-recently-used line.
    pub const EMPTY: Self = Self {
        tag: 0,
        valid: false,
        recently_used: false,
    };

    #[inline]
    pub fn matches(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Fills the line with `tag`. Recency is left to the replacement policy.
    #[inline]
    pub fn install(&mut self, tag: u64) {
        self.valid = true;
        self.tag = tag;
    }
}
