//! Core simulation components.

/// Modeled hardware units.
pub mod units;
