//! Core placement routine including grid assignment and separation search

/// Placement engine driving grid assignment and commits
pub mod placer;
/// Candidate sampling and separation checks
pub mod sampling;

pub use placer::{PlacementConfig, StickerPlacer};
