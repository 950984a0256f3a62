//! Set-Associative Cache Model.
//!
//! A functional model of one cache: it tracks which lines are resident and
//! counts hits and misses. No data, timing or coherence is modeled.
//!
//! # Layout
//!
//! The store is a single buffer of `sets * ways` lines. Way `w` of set `s`
//! lives at `s * ways + w`.
//!
//! # Address decomposition
//!
//! ```text
//!  63            tag_shift    line_size_log2       0
//! +-----------------+-------------+-----------------+
//! |       tag       |  set index  |   line offset   |
//! +-----------------+-------------+-----------------+
//! ```

/// Per-access diagnostic records and sinks.
pub mod debug;

/// Address decomposition and geometry validation.
pub mod geometry;

/// Cache line metadata.
pub mod line;

/// Victim selection for set-associative caches.
pub mod policies;

/// Read-only dump of the store.
pub mod snapshot;

pub use debug::{AccessRecord, AccessSink, DebugLog, NullSink, TracingSink, TRACE_TARGET};
pub use geometry::Geometry;
pub use line::CacheLine;
pub use snapshot::{CacheInfo, CacheSnapshot, LineSnapshot};

use crate::common::{AccessType, ConfigError, PhysAddr};
use crate::config::{CacheConfig, PolicyKind};
use crate::stats::CacheStats;
use policies::ReplacementPolicy;

/// A single simulated cache.
///
/// Instances are independent; an L1 and an L2 are simply two models. The
/// model is `Send` but not synchronized: it may move to another thread and
/// must be driven from one thread at a time.
pub struct CacheModel {
    geometry: Geometry,
    lines: Vec<CacheLine>,
    policy_kind: PolicyKind,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
    debug: DebugLog,
    sink: Box<dyn AccessSink + Send>,
}

impl CacheModel {
    /// Creates a cache of `size` bytes with `line_size`-byte lines and
    /// `assoc` ways per set, using the one-bit recency policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the geometry is rejected.
    pub fn new(size: u64, line_size: u64, assoc: u64) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(size, line_size, assoc)?;
        let policy_kind = PolicyKind::default();
        Ok(Self {
            geometry,
            lines: vec![CacheLine::EMPTY; geometry.lines()],
            policy_kind,
            policy: policies::build(policy_kind, geometry.sets, geometry.ways),
            stats: CacheStats::default(),
            debug: DebugLog::default(),
            sink: Box::new(TracingSink),
        })
    }

    /// Creates a cache from a configuration entry, applying its policy and
    /// debug settings.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        let mut cache = Self::new(config.size_bytes, config.line_bytes, config.ways)?;
        cache.set_policy(config.policy);
        cache.set_debug(config.debug, config.name.as_deref());
        Ok(cache)
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Box<dyn AccessSink + Send>) -> Self {
        self.sink = sink;
        self
    }

    /// Switches the replacement policy. Residency is kept; recency state
    /// starts over.
    pub fn set_policy(&mut self, kind: PolicyKind) {
        self.policy_kind = kind;
        self.policy = policies::build(kind, self.geometry.sets, self.geometry.ways);
        for line in &mut self.lines {
            line.recently_used = false;
        }
    }

    /// Enables or disables the debug sink, optionally renaming it.
    pub fn set_debug(&mut self, enabled: bool, name: Option<&str>) {
        self.debug.enabled = enabled;
        if let Some(name) = name {
            self.debug.name = name.to_string();
        }
    }

    /// Changes the geometry. The store is reallocated and flushed and the
    /// statistics are zeroed.
    ///
    /// # Errors
    ///
    /// On `ConfigError` nothing about the model changes.
    pub fn resize(&mut self, size: u64, line_size: u64, assoc: u64) -> Result<(), ConfigError> {
        let geometry = Geometry::new(size, line_size, assoc)?;

        self.geometry = geometry;
        self.lines = vec![CacheLine::EMPTY; geometry.lines()];
        self.policy = policies::build(self.policy_kind, geometry.sets, geometry.ways);
        self.stats.reset();

        tracing::debug!(
            target: TRACE_TARGET,
            cache = %self.debug.name,
            size,
            line_size,
            assoc,
            sets = geometry.sets,
            tag_shift = geometry.tag_shift,
            "resized"
        );
        Ok(())
    }

    /// Simulates one access and returns `true` on a hit.
    ///
    /// On a miss the line is installed: direct-mapped caches overwrite their
    /// only candidate, set-associative caches fill the way chosen by the
    /// replacement policy.
    pub fn access(&mut self, addr: u64, kind: AccessType) -> bool {
        let addr = PhysAddr::new(addr);
        let tag = self.geometry.tag_of(addr);
        let index = self.geometry.index_of(addr);
        let ways = self.geometry.ways;

        let set = &mut self.lines[index * ways..(index + 1) * ways];
        let hit = match set.iter().position(|line| line.matches(tag)) {
            Some(way) => {
                if ways > 1 {
                    self.policy.update(index, way, set);
                }
                true
            }
            None => {
                if ways == 1 {
                    set[0].install(tag);
                } else {
                    let way = self.policy.get_victim(index, set);
                    set[way].install(tag);
                    self.policy.update(index, way, set);
                }
                false
            }
        };

        self.stats.record(kind, hit);

        if self.debug.active() {
            let record = AccessRecord {
                addr,
                tag,
                index,
                kind,
                hit,
            };
            self.sink.record(&self.debug.name, &record);
        }

        hit
    }

    /// Returns whether the line holding `addr` is resident. Does not touch
    /// recency or statistics.
    pub fn contains(&self, addr: u64) -> bool {
        let addr = PhysAddr::new(addr);
        let tag = self.geometry.tag_of(addr);
        self.set(self.geometry.index_of(addr))
            .iter()
            .any(|line| line.matches(tag))
    }

    /// Invalidates every line. Geometry and statistics are untouched.
    pub fn flush(&mut self) {
        self.lines.fill(CacheLine::EMPTY);
        self.policy.reset();
    }

    /// Zeroes the statistics. The store is untouched.
    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy_kind
    }

    pub fn debug_log(&self) -> &DebugLog {
        &self.debug
    }

    /// The lines of set `index`, in way order.
    ///
    /// # Panics
    ///
    /// If `index` is not below the number of sets.
    pub fn set(&self, index: usize) -> &[CacheLine] {
        let ways = self.geometry.ways;
        &self.lines[index * ways..(index + 1) * ways]
    }

    /// One line, or `None` if `set` or `way` is out of range.
    pub fn line(&self, set: usize, way: usize) -> Option<&CacheLine> {
        if set < self.geometry.sets && way < self.geometry.ways {
            self.lines.get(set * self.geometry.ways + way)
        } else {
            None
        }
    }

    /// Configured parameters; displays under a `Cache Info` header.
    pub fn info(&self) -> CacheInfo {
        CacheInfo::from(&self.geometry)
    }

    /// Copies out the geometry and the tag and valid bit of every line.
    pub fn inspect(&self) -> CacheSnapshot {
        let ways = self.geometry.ways;
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| LineSnapshot {
                set: i / ways,
                way: i % ways,
                tag: line.tag,
                valid: line.valid,
                base: self.geometry.line_addr(line.tag, i / ways).val(),
            })
            .collect();
        CacheSnapshot {
            geometry: self.geometry,
            lines,
        }
    }
}
