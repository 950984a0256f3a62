//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides fundamental types for addresses, memory access
//! kinds and error handling that are shared between the cache model, the
//! configuration layer and the trace driver.

/// Physical address type.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types for configuration, trace parsing and simulation.
pub mod error;

pub use addr::PhysAddr;
pub use data::AccessType;
pub use error::{ConfigError, ParseError, SimError};
