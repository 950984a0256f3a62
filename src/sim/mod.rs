//! Trace-driven simulation.
//!
//! Reads access traces and replays them against one or two cache levels.

/// Access trace parsing.
pub mod trace;

/// L1/L2 driver.
pub mod hierarchy;

/// Subscriber filtering for the CLI.
pub mod logging;

pub use hierarchy::{Hierarchy, HierarchyReport, Outcome};
pub use logging::log_filter;
pub use trace::{read_trace, TraceRecord};
