//! Error types.
//!
//! Configuration is the only fallible operation of the cache model itself.
//! Trace parsing and the simulation driver add their own error kinds on top.

use std::io;
use thiserror::Error;

/// Rejected cache geometry.
///
/// Returned by construction and resize. A model that rejects a resize keeps
/// its previous geometry, store and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A geometry parameter is zero or not a power of two.
    #[error("{field} must be a power of two and > 0 (got {value})")]
    NotPowerOfTwo {
        /// Name of the rejected parameter.
        field: &'static str,
        /// Value that was supplied.
        value: u64,
    },

    /// `line_size * associativity` exceeds the total size.
    #[error("size {size} holds no sets of {associativity} x {line_size}-byte lines")]
    NoSets {
        size: u64,
        line_size: u64,
        associativity: u64,
    },
}

/// A malformed line in an access trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: expected `<R|W> <address>`, got {fields} field(s)")]
    FieldCount { line: usize, fields: usize },

    #[error("line {line}: unknown access kind `{kind}`")]
    InvalidKind { line: usize, kind: String },

    #[error("line {line}: invalid address `{addr}`")]
    InvalidAddress { line: usize, addr: String },
}

/// Errors surfaced by the trace simulation driver.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid cache configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Trace error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
