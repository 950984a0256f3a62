use serde::Deserialize;
use std::fmt;

use crate::common::ConfigError;
use crate::core::units::cache::Geometry;

const DEFAULT_SIZE: u64 = 4096;
const DEFAULT_LINE: u64 = 64;
const DEFAULT_WAYS: u64 = 1;

const L2_SIZE: u64 = 64 * 1024;
const L2_WAYS: u64 = 2;

/// Top-level simulator configuration, loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cache: CacheHierarchyConfig,
}

impl Config {
    /// Whether any cache level will emit per-access debug records.
    pub fn traces_accesses(&self) -> bool {
        self.general.trace_accesses
            || self.cache.l1.debug
            || self.cache.l2.as_ref().is_some_and(|l2| l2.debug)
            || cfg!(feature = "always-trace")
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneralConfig {
    /// Enables the per-access debug sink on every cache level.
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Replacement policy applied to set-associative caches.
///
/// Direct-mapped caches have a single candidate line and ignore this.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// One recency bit per way; the most recently touched way is the only
    /// one marked. Exact LRU for 2-way sets, pseudo-LRU above that.
    #[default]
    #[serde(alias = "recent-bit", alias = "plru", alias = "PLRU")]
    RecentBit,
    /// Full recency ordering per set.
    #[serde(alias = "lru", alias = "LRU")]
    Lru,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheHierarchyConfig {
    #[serde(default = "d_l1")]
    pub l1: CacheConfig,
    #[serde(default)]
    pub l2: Option<CacheConfig>,
}

impl Default for CacheHierarchyConfig {
    fn default() -> Self {
        Self {
            l1: d_l1(),
            l2: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "d_c_size")]
    pub size_bytes: u64,

    #[serde(default = "d_c_line")]
    pub line_bytes: u64,

    #[serde(default = "d_c_ways")]
    pub ways: u64,

    #[serde(default)]
    pub policy: PolicyKind,

    /// Name reported by the debug sink.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub debug: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            size_bytes: d_c_size(),
            line_bytes: d_c_line(),
            ways: d_c_ways(),
            policy: PolicyKind::default(),
            name: None,
            debug: false,
        }
    }
}

impl CacheConfig {
    /// Builds a configuration with the given geometry and default settings
    /// for everything else.
    pub fn with_geometry(size_bytes: u64, line_bytes: u64, ways: u64) -> Self {
        Self {
            size_bytes,
            line_bytes,
            ways,
            ..Self::default()
        }
    }

    /// A second-level configuration: 64 KiB, 64-byte lines, 2-way.
    pub fn l2_default() -> Self {
        Self {
            name: Some("L2".to_string()),
            ..Self::with_geometry(L2_SIZE, DEFAULT_LINE, L2_WAYS)
        }
    }

    /// Checks the geometry and derives the set layout from it.
    pub fn validate(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.size_bytes, self.line_bytes, self.ways)
    }
}

impl fmt::Display for CacheConfig {
    /// `<size> B, <line> B lines, <ways> ways, <policy>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} B, {} B lines, {} ways, {:?}",
            self.size_bytes, self.line_bytes, self.ways, self.policy
        )
    }
}

fn d_l1() -> CacheConfig {
    CacheConfig {
        name: Some("L1".to_string()),
        ..CacheConfig::default()
    }
}

fn d_c_size() -> u64 {
    DEFAULT_SIZE
}

fn d_c_line() -> u64 {
    DEFAULT_LINE
}

fn d_c_ways() -> u64 {
    DEFAULT_WAYS
}
