//! One-Bit Recency Replacement Policy.
//!
//! Each way carries a `recently_used` bit and at most one way per set has it
//! set: the way touched last, by hit or by fill. On a miss the victim is the
//! first invalid way, otherwise the first way in scan order whose bit is
//! clear. With two ways this is exact LRU; with more ways every unmarked way
//! is treated as equally old and the lowest index wins.

use super::{first_invalid, mark_only, ReplacementPolicy};
use crate::core::units::cache::line::CacheLine;

/// Stateless: all recency lives in the lines themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecentBitPolicy;

impl ReplacementPolicy for RecentBitPolicy {
    fn update(&mut self, _set: usize, way: usize, lines: &mut [CacheLine]) {
        mark_only(lines, way);
    }

    fn get_victim(&mut self, _set: usize, lines: &[CacheLine]) -> usize {
        first_invalid(lines)
            .or_else(|| lines.iter().position(|line| !line.recently_used))
            .unwrap_or(0)
    }
}
