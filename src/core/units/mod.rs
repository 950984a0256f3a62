//! Hardware units.

/// Set-associative cache model.
pub mod cache;
