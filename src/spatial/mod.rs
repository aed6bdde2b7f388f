//! Spatial structures: zone partitioning and render surfaces
//!
//! This module contains spatial-related functionality including:
//! - Near-square cell grid partitioning of a zone
//! - The render-surface capability trait hosts implement
//! - The name-keyed registry placement requests resolve against

/// Cell grid partitioning of a zone
pub mod grid;
/// Render-surface capability trait and registry
pub mod surface;

pub use grid::{Cell, CellGrid};
pub use surface::{MemorySurface, PlacedSticker, Surface, SurfaceRegistry};
