//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.

/// Cache model lookup, replacement and lifecycle tests.
mod cache_tests;
