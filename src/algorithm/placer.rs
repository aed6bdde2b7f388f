//! Sticker placement engine
//!
//! Drives the full placement pass for one zone: near-square grid partition,
//! row-major cell assignment, uniform asset choice, and jittered positioning
//! with a bounded separation search. The pass is a single linear loop; the
//! only state it keeps is the transient placed-set of committed positions.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::sampling::sample_position;
use crate::assets::catalog::AssetCatalog;
use crate::io::configuration::{CELL_PADDING, MAX_PLACEMENT_ATTEMPTS, MIN_STICKER_DISTANCE};
use crate::spatial::grid::CellGrid;
use crate::spatial::surface::{PlacedSticker, Surface, SurfaceRegistry};

/// Tunables for one placement pass
#[derive(Clone, Copy, Debug)]
pub struct PlacementConfig {
    /// Inset from each cell edge when sampling, in pixels
    pub cell_padding: f64,
    /// Minimum Euclidean separation between sticker centers, in pixels
    pub min_distance: f64,
    /// Candidate draws per sticker before accepting the last sample
    pub max_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            cell_padding: CELL_PADDING,
            min_distance: MIN_STICKER_DISTANCE,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Scatter placement engine with an injected random source
///
/// One engine carries a single RNG stream across consecutive zones, so a
/// fixed seed reproduces a whole page decoration exactly.
pub struct StickerPlacer<R: Rng> {
    catalog: AssetCatalog,
    config: PlacementConfig,
    rng: R,
}

impl StickerPlacer<StdRng> {
    /// Engine with a deterministic seeded random source
    pub fn seeded(catalog: AssetCatalog, config: PlacementConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StickerPlacer<R> {
    /// Engine over a caller-supplied random source
    pub const fn with_rng(catalog: AssetCatalog, config: PlacementConfig, rng: R) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    /// Scatter `count` stickers into the named zone
    ///
    /// An unregistered zone name is a silent no-op, not an error. The zone is
    /// cleared first, so repeat calls replace rather than accumulate. Each
    /// sticker takes the next grid cell in row-major order, draws its artwork
    /// uniformly from the catalog, and keeps the configured separation from
    /// its predecessors unless the attempt budget runs out, in which case the
    /// last candidate is committed anyway.
    pub fn place<S: Surface>(
        &mut self,
        registry: &mut SurfaceRegistry<S>,
        zone: &str,
        count: usize,
    ) {
        let Some(surface) = registry.get_mut(zone) else {
            return;
        };
        surface.clear();

        let [width, height] = surface.extent();
        let grid = CellGrid::partition(width, height, count);
        let mut committed: Vec<[f64; 2]> = Vec::with_capacity(count);

        for index in 0..count {
            let asset = self.catalog.choose(&mut self.rng);
            let cell = grid.cell_for(index);
            let position = sample_position(&cell, &committed, &self.config, &mut self.rng);

            committed.push(position);
            surface.attach(PlacedSticker { asset, position });
        }
    }
}
