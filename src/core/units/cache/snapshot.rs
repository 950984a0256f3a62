//! Read-only dump of the cache store.

use serde::Serialize;
use std::fmt;

use super::Geometry;

/// Configured size, associativity and line size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub size: u64,
    pub ways: usize,
    pub line_size: u64,
}

impl From<&Geometry> for CacheInfo {
    fn from(geometry: &Geometry) -> Self {
        Self {
            size: geometry.size,
            ways: geometry.ways,
            line_size: geometry.line_size,
        }
    }
}

impl CacheInfo {
    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "size: {}, assoc: {}, line-size: {}",
            self.size, self.ways, self.line_size
        )
    }
}

impl fmt::Display for CacheInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache Info")?;
        self.write_params(f)
    }
}

/// Tag and valid bit of one way, as reported by `CacheModel::inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSnapshot {
    pub set: usize,
    pub way: usize,
    pub tag: u64,
    pub valid: bool,
    /// First byte address of the memory line held by this way.
    pub base: u64,
}

/// Geometry plus every line of the store in set-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    pub geometry: Geometry,
    pub lines: Vec<LineSnapshot>,
}

impl CacheSnapshot {
    /// Lines that currently hold a tag.
    pub fn valid_lines(&self) -> impl Iterator<Item = &LineSnapshot> {
        self.lines.iter().filter(|line| line.valid)
    }
}

impl fmt::Display for CacheSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache Internals")?;
        CacheInfo::from(&self.geometry).write_params(f)?;
        for line in &self.lines {
            writeln!(
                f,
                "tag: <0x{:016x}> valid: {}",
                line.tag,
                u8::from(line.valid)
            )?;
        }
        Ok(())
    }
}
