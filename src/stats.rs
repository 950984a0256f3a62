//! Cache statistics collection and reporting.
//!
//! Tracks read and write accesses and their misses for one cache model.
//! Counters only grow until explicitly reset.

use serde::Serialize;

use crate::common::AccessType;

/// Access counters of a single cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub reads: u64,
    pub read_misses: u64,
    pub writes: u64,
    pub write_misses: u64,
}

impl CacheStats {
    /// Counts one access of `kind`, and a miss unless `hit`.
    #[inline]
    pub fn record(&mut self, kind: AccessType, hit: bool) {
        match kind {
            AccessType::Read => {
                self.reads += 1;
                if !hit {
                    self.read_misses += 1;
                }
            }
            AccessType::Write => {
                self.writes += 1;
                if !hit {
                    self.write_misses += 1;
                }
            }
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn accesses(&self) -> u64 {
        self.reads + self.writes
    }

    pub fn misses(&self) -> u64 {
        self.read_misses + self.write_misses
    }

    pub fn hits(&self) -> u64 {
        self.accesses() - self.misses()
    }

    /// Misses per access in percent, `0.0` before the first access.
    pub fn miss_rate(&self) -> f64 {
        let total = self.accesses();
        if total > 0 {
            (self.misses() as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Prints a formatted summary of the counters of the cache `name`.
    pub fn print(&self, name: &str) {
        let rate = |misses: u64, total: u64| {
            if total > 0 {
                (misses as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };

        println!("----------------------------------------------------------");
        println!("{}", name);
        println!(
            "  reads                  {:<10} | misses: {:<10} | miss_rate: {:.2}%",
            self.reads,
            self.read_misses,
            rate(self.read_misses, self.reads)
        );
        println!(
            "  writes                 {:<10} | misses: {:<10} | miss_rate: {:.2}%",
            self.writes,
            self.write_misses,
            rate(self.write_misses, self.writes)
        );
        println!(
            "  total                  {:<10} | misses: {:<10} | miss_rate: {:.2}%",
            self.accesses(),
            self.misses(),
            self.miss_rate()
        );
    }
}
