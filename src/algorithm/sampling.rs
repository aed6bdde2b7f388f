//! Candidate position sampling with bounded rejection against the placed-set

use rand::Rng;

use crate::algorithm::placer::PlacementConfig;
use crate::math::geometry::euclidean_distance;
use crate::spatial::grid::Cell;

/// Whether a candidate keeps the minimum separation from every committed position
pub fn is_separated(candidate: [f64; 2], committed: &[[f64; 2]], min_distance: f64) -> bool {
    committed
        .iter()
        .all(|&placed| euclidean_distance(candidate, placed) >= min_distance)
}

/// Draw a position for one sticker inside its cell
///
/// Up to `max_attempts` candidates are sampled uniformly from the cell inset
/// by the configured padding. The first candidate far enough from every
/// committed position wins; if none qualifies the last sample is returned
/// as-is, so callers always receive a position (best-effort separation).
/// Cells narrower than twice the padding invert the sampled span and the
/// candidate lands outside the cell; that degenerate case is accepted, not
/// guarded.
pub fn sample_position<R: Rng>(
    cell: &Cell,
    committed: &[[f64; 2]],
    config: &PlacementConfig,
    rng: &mut R,
) -> [f64; 2] {
    let origin = cell.inset_origin(config.cell_padding);
    let extent = cell.inset_extent(config.cell_padding);

    let mut candidate = origin;
    for _ in 0..config.max_attempts {
        candidate = [
            rng.random::<f64>().mul_add(extent[0], origin[0]),
            rng.random::<f64>().mul_add(extent[1], origin[1]),
        ];

        if is_separated(candidate, committed, config.min_distance) {
            return candidate;
        }
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_placed_set_is_always_separated() {
        assert!(is_separated([0.0, 0.0], &[], 120.0));
    }

    #[test]
    fn test_separation_boundary_is_inclusive() {
        let committed = [[0.0, 0.0]];
        assert!(is_separated([120.0, 0.0], &committed, 120.0));
        assert!(!is_separated([119.0, 0.0], &committed, 120.0));
    }

    #[test]
    fn test_any_violating_neighbor_rejects_the_candidate() {
        let committed = [[500.0, 500.0], [80.0, 0.0]];
        assert!(!is_separated([0.0, 0.0], &committed, 120.0));
    }
}
