//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest time.
//! It maintains a usage stack for each set. When a line is accessed, it is moved
//! to the top (Most Recently Used position). The bottom of the stack represents
//! the Least Recently Used line. Invalid ways are always filled first.
//!
//! The stacks of all sets share one contiguous buffer; the stack of set `s`
//! occupies `usage[s * ways..(s + 1) * ways]`.

use super::{first_invalid, mark_only, ReplacementPolicy};
use crate::core::units::cache::line::CacheLine;

/// LRU Policy state.
pub struct LruPolicy {
    ways: usize,
    /// Index 0 of each stack is MRU, the last index is LRU.
    usage: Vec<usize>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        let mut policy = Self {
            ways,
            usage: vec![0; sets * ways],
        };
        policy.reset();
        policy
    }

    fn stack(&self, set: usize) -> &[usize] {
        &self.usage[set * self.ways..(set + 1) * self.ways]
    }

    fn stack_mut(&mut self, set: usize) -> &mut [usize] {
        &mut self.usage[set * self.ways..(set + 1) * self.ways]
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves `way` to the MRU position, shifting the ways above it down.
    fn update(&mut self, set: usize, way: usize, lines: &mut [CacheLine]) {
        let stack = self.stack_mut(set);
        if let Some(pos) = stack.iter().position(|&x| x == way) {
            stack[..=pos].rotate_right(1);
        }
        mark_only(lines, way);
    }

    /// Returns the first invalid way, or the way at the bottom of the stack.
    fn get_victim(&mut self, set: usize, lines: &[CacheLine]) -> usize {
        first_invalid(lines)
            .or_else(|| self.stack(set).last().copied())
            .unwrap_or(0)
    }

    fn reset(&mut self) {
        let ways = self.ways;
        for (i, slot) in self.usage.iter_mut().enumerate() {
            *slot = i % ways;
        }
    }
}
