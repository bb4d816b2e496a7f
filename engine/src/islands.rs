//! Island counting: distinct 8-connected landmasses at a given water height.
//!
//! Two patches of land touching only at a corner are one island; a single
//! flooded cell severing that corner splits them. The union-find is rebuilt
//! per query because the submersion state is height-dependent.

use crate::flood;
use crate::terrain::Terrain;
use crate::union_find::UnionFind;

/// Forward 8-neighborhood offsets. Scanning row-major, these four cover
/// every unordered adjacent pair exactly once; the anti-diagonal (+1,-1)
/// is required for full 8-connectivity, not just the three "natural"
/// forward directions.
const FORWARD: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Count the disjoint 8-connected landmasses when the water is at `height`.
///
/// Computes the submersion map, unions every pair of adjacent dry cells
/// under the forward offsets, then counts the dry cells that are their own
/// root. O(rows * cols) union-find operations, each amortized near-constant.
/// Water at or above the global maximum elevation yields 0; water below the
/// global minimum yields 1 (a rectangular all-land grid is 8-connected).
pub fn count_islands(terrain: &Terrain, height: f64) -> usize {
    let map = flood::flooded_regions(terrain, height);
    let (rows, cols) = (terrain.rows(), terrain.cols());
    let mut uf = UnionFind::new(terrain.cells());

    for r in 0..rows {
        for c in 0..cols {
            if map.get(r, c) {
                continue;
            }
            for (dr, dc) in FORWARD {
                let (nr, nc) = (r as i64 + dr, c as i64 + dc);
                if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if map.get(nr, nc) {
                    continue;
                }
                uf.union(r * cols + c, nr * cols + nc);
            }
        }
    }

    let mut islands = 0usize;
    for i in 0..terrain.cells() {
        if !map.as_slice()[i] && uf.find(i) == i {
            islands += 1;
        }
    }
    islands
}
