//! Elevation grid model: rectangular height field plus designated water sources.
//!
//! The terrain is immutable after construction; every derived structure
//! (flood map, union-find) is built fresh per query so no stale state can
//! leak between calls.

/// One grid cell identified by a (row, col) pair.
///
/// Coordinates are signed so callers can express out-of-range locations
/// (including negative ones); boundary-tolerant queries treat those as dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLocation {
    /// Row index (0 at the top edge)
    pub row: i32,
    /// Column index (0 at the left edge)
    pub col: i32,
}

impl GridLocation {
    /// Convenience constructor.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for GridLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors from terrain construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TerrainError {
    /// The elevation matrix has no rows.
    #[error("terrain has no rows")]
    Empty,
    /// The first row has no columns.
    #[error("terrain has no columns")]
    EmptyRow,
    /// A row's length differs from the first row's.
    #[error("ragged terrain: row {row} has {got} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Column count of row 0
        expected: usize,
        /// Column count of the offending row
        got: usize,
    },
    /// A designated water source lies outside the grid.
    #[error("water source {0} is outside the grid")]
    SourceOutOfBounds(GridLocation),
}

/// Immutable rectangular elevation field with designated water-source cells.
///
/// Elevations are stored flattened row-major (`row * cols + col`), the same
/// SoA layout the rest of the engine indexes by.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    rows: usize,
    cols: usize,
    heights: Vec<f64>,
    sources: Vec<GridLocation>,
}

impl Terrain {
    /// Build a terrain from a row-major elevation matrix and its source cells.
    ///
    /// Fails if the matrix is empty, ragged, or a source is out of bounds.
    pub fn new(
        heights: Vec<Vec<f64>>,
        sources: Vec<GridLocation>,
    ) -> Result<Self, TerrainError> {
        let rows = heights.len();
        if rows == 0 {
            return Err(TerrainError::Empty);
        }
        let cols = heights[0].len();
        if cols == 0 {
            return Err(TerrainError::EmptyRow);
        }
        let mut flat: Vec<f64> = Vec::with_capacity(rows * cols);
        for (r, row) in heights.iter().enumerate() {
            if row.len() != cols {
                return Err(TerrainError::Ragged { row: r, expected: cols, got: row.len() });
            }
            flat.extend_from_slice(row);
        }
        let t = Self { rows, cols, heights: flat, sources: Vec::new() };
        for &s in &sources {
            if !t.in_bounds(s) {
                return Err(TerrainError::SourceOutOfBounds(s));
            }
        }
        Ok(Self { sources, ..t })
    }

    /// Number of rows (>= 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (>= 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `loc` names a cell inside the grid.
    pub fn in_bounds(&self, loc: GridLocation) -> bool {
        loc.row >= 0
            && loc.col >= 0
            && (loc.row as usize) < self.rows
            && (loc.col as usize) < self.cols
    }

    /// Flattened row-major index for `loc`, or `None` if out of bounds.
    pub fn index(&self, loc: GridLocation) -> Option<usize> {
        if self.in_bounds(loc) {
            Some(loc.row as usize * self.cols + loc.col as usize)
        } else {
            None
        }
    }

    /// Elevation at `loc`, or `None` if out of bounds.
    pub fn height_at(&self, loc: GridLocation) -> Option<f64> {
        self.index(loc).map(|i| self.heights[i])
    }

    /// Elevation at in-range row/col indices.
    #[inline]
    pub(crate) fn height_at_rc(&self, row: usize, col: usize) -> f64 {
        self.heights[row * self.cols + col]
    }

    /// Flattened row-major elevation storage.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// The designated water-source cells supplied at construction.
    ///
    /// Carried as model data for collaborators; flooding itself is
    /// elevation-driven (see [`crate::flood::flooded_regions`]).
    pub fn sources(&self) -> &[GridLocation] {
        &self.sources
    }
}
