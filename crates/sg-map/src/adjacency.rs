//! Country adjacency derived from shared cell borders.
//!
//! # Edge rule
//!
//! Only interior cells contribute: a cell on the outer grid edge is skipped
//! even when it touches a foreign cell.  Two countries whose territories
//! meet exclusively along the outer edge therefore never register the
//! contact, and the relation can be *asymmetric* — country A may list B
//! while B lists nobody, when all of B's frontier cells sit on the edge.
//! This is the faithful border rule, not a defect.

use rustc_hash::FxHashSet;

use sg_core::CountryId;

use crate::WorldGrid;

/// Neighbour lists indexed by `CountryId`, each deduplicated and sorted
/// ascending for deterministic iteration.  A country never lists itself.
pub fn build_adjacency(grid: &WorldGrid) -> Vec<Vec<CountryId>> {
    let mut lists = Vec::with_capacity(grid.country_count());

    for c in 0..grid.country_count() {
        let country = CountryId(c as u16);
        let mut seen: FxHashSet<CountryId> = FxHashSet::default();

        for cell in grid.cells_of(country) {
            if grid.on_outer_edge(cell) {
                continue;
            }
            for neighbour in grid.axis_neighbours(cell) {
                if neighbour.country != country {
                    seen.insert(neighbour.country);
                }
            }
        }

        let mut list: Vec<CountryId> = seen.into_iter().collect();
        list.sort_unstable();
        lists.push(list);
    }

    lists
}
