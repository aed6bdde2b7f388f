//! Mathematical utilities for scatter placement

/// Distance and grid factorization helpers
pub mod geometry;
