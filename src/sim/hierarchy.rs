//! Two-Level Cache Hierarchy.
//!
//! Drives an L1 model and an optional L2 model with the same access stream.
//! Every access goes to L1; accesses that miss in L1 are forwarded to L2.
//! The levels share no state and keep separate statistics.

use serde::Serialize;

use super::trace::TraceRecord;
use crate::common::ConfigError;
use crate::config::{CacheConfig, Config};
use crate::core::units::cache::CacheModel;
use crate::stats::CacheStats;

/// Where an access was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    L1Hit,
    L2Hit,
    /// Missed every modeled level.
    Miss,
}

/// Counters of every level after a run.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyReport {
    pub l1: CacheStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<CacheStats>,
}

pub struct Hierarchy {
    pub l1: CacheModel,
    pub l2: Option<CacheModel>,
}

impl Hierarchy {
    /// Builds every configured level. `trace_accesses` enables the debug
    /// sink on all levels in addition to per-level settings.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let build = |level: &CacheConfig| -> Result<CacheModel, ConfigError> {
            let mut cache = CacheModel::from_config(level)?;
            if config.general.trace_accesses {
                cache.set_debug(true, None);
            }
            Ok(cache)
        };

        Ok(Self {
            l1: build(&config.cache.l1)?,
            l2: config.cache.l2.as_ref().map(build).transpose()?,
        })
    }

    pub fn access(&mut self, record: TraceRecord) -> Outcome {
        if self.l1.access(record.addr, record.kind) {
            return Outcome::L1Hit;
        }
        match self.l2.as_mut().map(|l2| l2.access(record.addr, record.kind)) {
            Some(true) => Outcome::L2Hit,
            _ => Outcome::Miss,
        }
    }

    /// Feeds every record in order.
    pub fn run<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = TraceRecord>,
    {
        for record in records {
            self.access(record);
        }
    }

    pub fn flush(&mut self) {
        self.l1.flush();
        if let Some(l2) = self.l2.as_mut() {
            l2.flush();
        }
    }

    pub fn reset_statistics(&mut self) {
        self.l1.reset_statistics();
        if let Some(l2) = self.l2.as_mut() {
            l2.reset_statistics();
        }
    }

    pub fn report(&self) -> HierarchyReport {
        HierarchyReport {
            l1: *self.l1.stats(),
            l2: self.l2.as_ref().map(|l2| *l2.stats()),
        }
    }
}
