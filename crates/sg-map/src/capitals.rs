//! Capital selection.
//!
//! The capital is the single cell that represents a country in the
//! inter-capital graph.  Selection starts from the country's centroid point
//! (integer-truncated mean of its cell coordinates) and falls back to the
//! nearest non-border cell when the centroid is unsuitable.
//!
//! The two fallback branches test *different* conditions — border status of
//! the centroid cell versus its country membership — and both resolve to the
//! same nearest-inland search.  The asymmetry is intentional and the output
//! depends on it; do not unify the branches.

use sg_core::{CountryId, GridPoint};

use crate::{MapError, MapResult, WorldGrid};

/// Capital of every country, indexed by `CountryId`.
///
/// Fails on the first country that has no non-border cell — an invalid
/// partition with no recovery policy.
pub fn locate_capitals(grid: &WorldGrid) -> MapResult<Vec<GridPoint>> {
    (0..grid.country_count())
        .map(|c| capital_of(grid, CountryId(c as u16)))
        .collect()
}

/// Capital of a single country.
///
/// 1. Centroid cell owned by the country and not a border cell → that cell.
/// 2. Centroid cell owned by the country but on a border → nearest inland
///    cell.
/// 3. Centroid cell owned by someone else → nearest inland cell.
pub fn capital_of(grid: &WorldGrid, country: CountryId) -> MapResult<GridPoint> {
    let (mut sum_x, mut sum_y, mut count) = (0i64, 0i64, 0i64);
    for cell in grid.cells_of(country) {
        sum_x += i64::from(cell.x);
        sum_y += i64::from(cell.y);
        count += 1;
    }
    // Country ids are dense, so every country owns at least one cell.
    let centroid = GridPoint::new((sum_x / count) as i32, (sum_y / count) as i32);

    let at_centroid = grid.cell_at(centroid);
    if at_centroid.country == country && !grid.is_border(at_centroid) {
        return Ok(centroid);
    }
    nearest_inland(grid, country, centroid)
}

/// Nearest non-border cell of `country` to `from`, by Manhattan distance.
///
/// Ties go to the candidate with the strictly smaller `x`; at equal distance
/// and equal `x`, the earlier cell in parse order wins.  The tie-break
/// direction is observable on symmetric layouts.
fn nearest_inland(grid: &WorldGrid, country: CountryId, from: GridPoint) -> MapResult<GridPoint> {
    let mut best: Option<(u32, GridPoint)> = None;
    for cell in grid.cells_of(country) {
        if grid.is_border(cell) {
            continue;
        }
        let dist = from.manhattan(cell.point());
        match best {
            None => best = Some((dist, cell.point())),
            Some((best_dist, best_point)) => {
                if dist < best_dist || (dist == best_dist && cell.x < best_point.x) {
                    best = Some((dist, cell.point()));
                }
            }
        }
    }
    best.map(|(_, p)| p)
        .ok_or(MapError::NoInlandCell { country })
}
