//! Flood-fill engine: which cells are underwater at a given water height.
//!
//! Submersion is elevation-driven: every cell at or below the query height
//! seeds the fill, and water spreads through 4-adjacent cells that are also
//! at or below the height. The result is a fresh boolean map per call;
//! nothing is cached and the terrain is never mutated.

use std::collections::VecDeque;

use crate::terrain::{GridLocation, Terrain};

/// Boolean submersion matrix with the terrain's dimensions.
///
/// Ephemeral: produced by [`flooded_regions`] and discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodMap {
    rows: usize,
    cols: usize,
    flooded: Vec<bool>,
}

impl FloodMap {
    fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, flooded: vec![false; rows * cols] }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Submersion state at in-range row/col indices.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.flooded[row * self.cols + col]
    }

    /// Submersion state at `loc`; out-of-bounds locations are dry.
    pub fn is_flooded(&self, loc: GridLocation) -> bool {
        if loc.row < 0 || loc.col < 0 {
            return false;
        }
        let (r, c) = (loc.row as usize, loc.col as usize);
        if r >= self.rows || c >= self.cols {
            return false;
        }
        self.get(r, c)
    }

    /// Number of submerged cells.
    pub fn flooded_count(&self) -> usize {
        self.flooded.iter().filter(|&&f| f).count()
    }

    /// Flattened row-major view of the map.
    pub fn as_slice(&self) -> &[bool] {
        &self.flooded
    }
}

/// 4-neighborhood offsets (up, down, left, right).
const ORTHO: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Compute the submersion map for water at `height`.
///
/// A cell is submerged iff it is reachable from some cell with elevation
/// `<= height` through a path of 4-adjacent cells whose elevations are all
/// `<= height`. Every qualifying cell acts as a seed, so the fill covers
/// exactly the at-or-below set regardless of where the designated sources
/// sit. O(rows * cols) time and space; deterministic for a given height.
pub fn flooded_regions(terrain: &Terrain, height: f64) -> FloodMap {
    let (rows, cols) = (terrain.rows(), terrain.cols());
    let mut map = FloodMap::new(rows, cols);
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    // Seed from every cell at or below the waterline.
    for r in 0..rows {
        for c in 0..cols {
            if terrain.height_at_rc(r, c) <= height {
                map.flooded[r * cols + c] = true;
                queue.push_back((r, c));
            }
        }
    }

    // Spread to 4-adjacent cells at or below the waterline. The map doubles
    // as the visited set, so each cell is enqueued at most once.
    while let Some((r, c)) = queue.pop_front() {
        for (dr, dc) in ORTHO {
            let (nr, nc) = (r as i64 + dr, c as i64 + dc);
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            let idx = nr * cols + nc;
            if map.flooded[idx] || terrain.height_at_rc(nr, nc) > height {
                continue;
            }
            map.flooded[idx] = true;
            queue.push_back((nr, nc));
        }
    }

    map
}
