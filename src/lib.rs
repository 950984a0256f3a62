//! Functional Set-Associative Cache Simulator Library.
//!
//! This crate models which memory lines are resident in a hardware cache for
//! a stream of read and write accesses, and counts hits and misses. It does
//! not model data, timing or coherence.
//!
//! # Architecture
//!
//! * **Cache Model**: power-of-two geometry, tag/index/offset decomposition,
//!   per-set replacement and statistics.
//! * **Policies**: one-bit recency (default) and true LRU.
//! * **Driver**: trace parsing and an L1/L2 hierarchy for the CLI.
//!
//! # Modules
//!
//! * `common`: Shared types and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: The cache model and its replacement policies.
//! * `sim`: Trace parsing and the hierarchy driver.
//! * `stats`: Hit/miss statistics collection.

/// Shared types, address wrapper and error handling.
pub mod common;

/// Configuration system for cache geometry, policy and debug output.
///
/// Loads and parses TOML configuration files describing one or two cache
/// levels.
pub mod config;

/// Cache model implementation.
pub mod core;

/// Trace-driven simulation harness.
pub mod sim;

/// Hit/miss statistics collection and reporting.
pub mod stats;

pub use crate::common::{AccessType, ConfigError};
pub use crate::core::units::cache::CacheModel;
pub use crate::stats::CacheStats;
