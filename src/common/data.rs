//! Memory Access Types.
//!
//! This module defines the classification of memory accesses fed into the
//! cache model. The model only distinguishes reads from writes; both follow
//! the same lookup and replacement path and differ only in which statistics
//! counters they advance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Advances the read counter, and the read-miss counter on a miss.
    Read,

    /// Data write access.
    ///
    /// Advances the write counter, and the write-miss counter on a miss.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Read => write!(f, "read"),
            AccessType::Write => write!(f, "write"),
        }
    }
}
