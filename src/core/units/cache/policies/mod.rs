//! Replacement policies for set-associative caches.
//!
//! A policy is consulted only when a set has more than one way. It picks the
//! victim on a miss and updates recency after every hit or install.

use super::line::CacheLine;
use crate::config::PolicyKind;

/// One recency bit per way.
pub mod recent_bit;

/// Full least-recently-used ordering.
pub mod lru;

pub use lru::LruPolicy;
pub use recent_bit::RecentBitPolicy;

/// Victim selection and recency tracking for one cache.
///
/// `lines` is always the full set addressed by `set`, in way order.
pub trait ReplacementPolicy: Send {
    /// Records that `way` of `set` was just hit or filled.
    fn update(&mut self, set: usize, way: usize, lines: &mut [CacheLine]);

    /// Chooses the way of `set` to fill on a miss.
    fn get_victim(&mut self, set: usize, lines: &[CacheLine]) -> usize;

    /// Returns all per-set state to its power-on value.
    fn reset(&mut self) {}
}

/// Builds the policy selected by `kind` for a cache of `sets` x `ways`.
pub fn build(
    kind: PolicyKind,
    sets: usize,
    ways: usize,
) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::RecentBit => Box::new(RecentBitPolicy),
        PolicyKind::Lru => Box::new(LruPolicy::new(sets, ways)),
    }
}

/// Marks `way` as the only recently used line of the set.
pub(crate) fn mark_only(lines: &mut [CacheLine], way: usize) {
    for (i, line) in lines.iter_mut().enumerate() {
        line.recently_used = i == way;
    }
}

/// First way that has never been filled since the last flush.
pub(crate) fn first_invalid(lines: &[CacheLine]) -> Option<usize> {
    lines.iter().position(|line| !line.valid)
}
