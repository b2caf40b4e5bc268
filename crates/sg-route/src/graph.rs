//! The inter-capital graph.
//!
//! # Data layout
//!
//! Countries are dense integer ids, so the graph is two flat vectors indexed
//! by `CountryId`: the capital point and the neighbour list of each country.
//! No composite-key maps — distance and visited state downstream live in
//! flat arrays indexed the same way.

use sg_core::{CountryId, GridPoint};

use crate::{RouteError, RouteResult};

/// Capitals plus the country adjacency relation, indexed by `CountryId`.
///
/// The adjacency is stored exactly as constructed: directional, possibly
/// asymmetric when a country borders another only via outer-edge cells.
/// Immutable once built; presentation code may read capitals, neighbour
/// lists and pairwise costs freely.
pub struct CapitalGraph {
    capitals: Vec<GridPoint>,
    neighbours: Vec<Vec<CountryId>>,
}

impl CapitalGraph {
    /// Validate that both inputs cover the same dense id range and that
    /// every neighbour reference is in range.
    pub fn new(capitals: Vec<GridPoint>, neighbours: Vec<Vec<CountryId>>) -> RouteResult<Self> {
        if capitals.len() != neighbours.len() {
            return Err(RouteError::CountMismatch {
                capitals: capitals.len(),
                neighbour_lists: neighbours.len(),
            });
        }
        for (id, list) in neighbours.iter().enumerate() {
            if let Some(&bad) = list.iter().find(|n| n.index() >= capitals.len()) {
                return Err(RouteError::UnknownCountry {
                    country: CountryId(id as u16),
                    neighbour: bad,
                });
            }
        }
        Ok(Self { capitals, neighbours })
    }

    pub fn country_count(&self) -> usize {
        self.capitals.len()
    }

    /// Capital point of `country`.
    #[inline]
    pub fn capital(&self, country: CountryId) -> GridPoint {
        self.capitals[country.index()]
    }

    /// Countries adjacent to `country`, sorted ascending.
    #[inline]
    pub fn neighbours(&self, country: CountryId) -> &[CountryId] {
        &self.neighbours[country.index()]
    }

    /// Travel cost of the direct hop between two capitals: the truncated
    /// integer Euclidean distance between their points.
    #[inline]
    pub fn edge_cost(&self, a: CountryId, b: CountryId) -> u32 {
        self.capital(a).euclid_trunc(self.capital(b))
    }
}
