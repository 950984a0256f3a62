//! Per-access diagnostics.
//!
//! The cache model describes every access as an `AccessRecord` and hands it
//! to an `AccessSink` when debug logging is enabled. Formatting and
//! destination belong to the sink; the model never formats anything itself.

use std::fmt;

use crate::common::{AccessType, PhysAddr};

/// `tracing` target of access records and model events.
pub const TRACE_TARGET: &str = "avdc";

/// Name reported when the caller does not pick one.
pub const DEFAULT_DEBUG_NAME: &str = "AVDC";

/// Outcome of a single access, as seen by the diagnostic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    pub addr: PhysAddr,
    pub tag: u64,
    pub index: usize,
    pub kind: AccessType,
    pub hit: bool,
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pa: 0x{:016x}, tag: 0x{:016x}, index: {}, hit: {}",
            self.kind,
            self.addr.val(),
            self.tag,
            self.index,
            u8::from(self.hit)
        )
    }
}

/// Destination for access records.
pub trait AccessSink {
    /// Receives one record. `name` identifies the emitting cache.
    fn record(&mut self, name: &str, record: &AccessRecord);
}

/// Forwards records to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AccessSink for TracingSink {
    fn record(&mut self, name: &str, record: &AccessRecord) {
        tracing::debug!(
            target: TRACE_TARGET,
            cache = name,
            addr = record.addr.val(),
            tag = record.tag,
            index = record.index,
            kind = %record.kind,
            hit = record.hit,
            "[{}] dbg: {}",
            name,
            record
        );
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl AccessSink for NullSink {
    fn record(&mut self, _name: &str, _record: &AccessRecord) {}
}

/// Debug logging switch and the name records are tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLog {
    pub name: String,
    pub enabled: bool,
}

impl Default for DebugLog {
    /// Disabled, named `AVDC`. The `always-trace` feature turns it on.
    fn default() -> Self {
        Self {
            name: DEFAULT_DEBUG_NAME.to_string(),
            enabled: cfg!(feature = "always-trace"),
        }
    }
}

impl DebugLog {
    /// Returns whether records should be produced.
    #[inline]
    pub fn active(&self) -> bool {
        self.enabled || cfg!(feature = "always-trace")
    }
}
