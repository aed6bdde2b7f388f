//! Cell grid partitioning of a rectangular zone
//!
//! A zone is divided into a near-square grid of uniform cells and each
//! sticker is assigned one cell in row-major order before random jitter
//! inside the cell. Cell extents are not remainder-adjusted, so the grid is
//! an accepted approximation of the zone rather than an exact tiling.

use ndarray::Array2;

use crate::math::geometry::near_square_partition;

/// One rectangular partition of a zone, in zone-relative pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Left edge offset from the zone origin
    pub left: f64,
    /// Top edge offset from the zone origin
    pub top: f64,
    /// Cell width
    pub width: f64,
    /// Cell height
    pub height: f64,
}

impl Cell {
    /// Zero-extent cell at the zone origin
    pub const EMPTY: Self = Self {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Origin of the jitter region after insetting by `padding` on each edge
    pub const fn inset_origin(&self, padding: f64) -> [f64; 2] {
        [self.left + padding, self.top + padding]
    }

    /// Extent of the jitter region after insetting by `padding` on each edge
    ///
    /// Goes negative when the cell is narrower than twice the padding; the
    /// sampler feeds the raw span through unchanged, matching the accepted
    /// degenerate behavior.
    pub const fn inset_extent(&self, padding: f64) -> [f64; 2] {
        [self.width - 2.0 * padding, self.height - 2.0 * padding]
    }
}

/// Near-square grid of uniform cells covering a zone
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Array2<Cell>,
    columns: usize,
}

impl CellGrid {
    /// Partition a zone of the given extent into cells for `count` stickers
    ///
    /// A count of zero yields an empty grid that no sticker ever consults.
    pub fn partition(width: f64, height: f64, count: usize) -> Self {
        let (columns, rows) = near_square_partition(count);
        let cell_width = if columns == 0 {
            0.0
        } else {
            width / columns as f64
        };
        let cell_height = if rows == 0 { 0.0 } else { height / rows as f64 };

        let cells = Array2::from_shape_fn((rows, columns), |(row, col)| Cell {
            left: col as f64 * cell_width,
            top: row as f64 * cell_height,
            width: cell_width,
            height: cell_height,
        });

        Self { cells, columns }
    }

    /// Number of grid columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell assigned to a 0-based sticker index, row-major
    ///
    /// Indices past the grid fall back to [`Cell::EMPTY`]; the placer never
    /// asks for one because counts and grids derive from the same partition.
    pub fn cell_for(&self, sticker_index: usize) -> Cell {
        if self.columns == 0 {
            return Cell::EMPTY;
        }

        let row = sticker_index / self.columns;
        let col = sticker_index % self.columns;
        self.cells.get((row, col)).copied().unwrap_or(Cell::EMPTY)
    }
}
