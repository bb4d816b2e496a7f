//! Terrain queries derived from the submersion map or direct height
//! comparisons: extrema over the submerged set, per-cell submersion and
//! waterline offset, visible-land counts, and land-loss deltas.
//!
//! Sign conventions are numeric only; turning them into "above"/"below" or
//! "gain"/"lose" wording is a presentation concern outside this crate.

use crate::flood;
use crate::terrain::{GridLocation, Terrain};

/// Errors from terrain queries.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueryError {
    /// The requested cell lies outside the grid.
    #[error("location {0} is outside the grid")]
    OutOfBounds(GridLocation),
    /// No cell is submerged at the requested height, so extrema are undefined.
    #[error("no submerged cells at the requested height")]
    NoSubmergedCells,
}

/// Minimum and maximum elevation among cells submerged at `height`.
///
/// The height is an explicit parameter so the submerged set is always the
/// one the caller asked about. Errs with [`QueryError::NoSubmergedCells`]
/// when the water sits below every cell; a numeric sentinel is never
/// returned for the empty case.
pub fn submerged_extrema(terrain: &Terrain, height: f64) -> Result<(f64, f64), QueryError> {
    let map = flood::flooded_regions(terrain, height);
    let mut extrema: Option<(f64, f64)> = None;
    for (i, &elev) in terrain.heights().iter().enumerate() {
        if !map.as_slice()[i] {
            continue;
        }
        extrema = Some(match extrema {
            None => (elev, elev),
            Some((lo, hi)) => (lo.min(elev), hi.max(elev)),
        });
    }
    extrema.ok_or(QueryError::NoSubmergedCells)
}

/// Whether the cell at `loc` is underwater when the water is at `height`.
///
/// Out-of-bounds locations are dry. A direct elevation comparison; the
/// at-or-below set is exactly the flooded set, so no traversal is needed.
pub fn is_submerged(terrain: &Terrain, height: f64, loc: GridLocation) -> bool {
    match terrain.height_at(loc) {
        Some(elev) => elev <= height,
        None => false,
    }
}

/// Elevation of the cell at `loc` relative to the waterline at `height`.
///
/// Negative means the cell sits below water, positive above. Requires an
/// in-bounds cell; errs rather than computing on an invalid location.
pub fn height_above_water(
    terrain: &Terrain,
    height: f64,
    loc: GridLocation,
) -> Result<f64, QueryError> {
    let elev = terrain.height_at(loc).ok_or(QueryError::OutOfBounds(loc))?;
    Ok(elev - height)
}

/// Number of cells strictly above the waterline at `height`.
pub fn total_visible_land(terrain: &Terrain, height: f64) -> usize {
    terrain.heights().iter().filter(|&&elev| elev > height).count()
}

/// Signed change in visible land moving the waterline from `height` to
/// `new_height`: positive means land is lost, negative means land is gained.
/// Zero when the heights are equal.
pub fn land_delta(terrain: &Terrain, height: f64, new_height: f64) -> i64 {
    total_visible_land(terrain, height) as i64 - total_visible_land(terrain, new_height) as i64
}
