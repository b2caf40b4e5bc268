//! The per-panel cost rule.

use sg_route::DistanceTable;

use crate::SolarPanel;

/// Total cost of collecting one panel at the table's source capital:
/// intrinsic price plus the shortest-path distance from the owner's capital.
///
/// An unreachable owner contributes the [`UNREACHED`][sg_route::UNREACHED]
/// sentinel verbatim into the sum — "unreachable" flows through to the cost
/// output rather than being treated as an error.
#[inline]
pub fn panel_cost(panel: &SolarPanel, distances: &DistanceTable) -> u64 {
    u64::from(panel.price) + u64::from(distances.get(panel.country))
}
