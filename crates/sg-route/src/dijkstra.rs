//! Single-source shortest distances over the capital graph.
//!
//! Classic Dijkstra with a **lazy-deletion** min-heap: when a country's
//! distance improves, the new entry is simply pushed and the stale one is
//! skipped on pop once the country is marked visited.  Nothing is ever
//! searched for or removed from the heap by value, so duplicate entries for
//! the same country are harmless.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sg_core::CountryId;

use crate::CapitalGraph;

/// Sentinel distance for a capital the source cannot reach.
pub const UNREACHED: u32 = 1_000_000;

/// Shortest distance from one fixed source capital to every capital.
///
/// A fresh table is computed per source country and discarded after the
/// pricing pass that consumed it.
pub struct DistanceTable {
    dist: Vec<u32>,
}

impl DistanceTable {
    /// Distance from the source to `country`'s capital; [`UNREACHED`] when
    /// no path exists.
    #[inline]
    pub fn get(&self, country: CountryId) -> u32 {
        self.dist[country.index()]
    }

    pub fn is_unreached(&self, country: CountryId) -> bool {
        self.get(country) == UNREACHED
    }

    pub fn country_count(&self) -> usize {
        self.dist.len()
    }
}

/// Run Dijkstra from `source` over the capital graph.
///
/// Edge weights are the truncated integer Euclidean distances between
/// capital points.  The source's own distance is 0; capitals unreachable
/// through the (directional) neighbour relation keep [`UNREACHED`].
pub fn shortest_distances(graph: &CapitalGraph, source: CountryId) -> DistanceTable {
    let n = graph.country_count();
    let mut dist = vec![UNREACHED; n];
    let mut visited = vec![false; n];
    dist[source.index()] = 0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key CountryId gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, CountryId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, country))) = heap.pop() {
        // Stale entry for an already-settled country.
        if visited[country.index()] {
            continue;
        }
        visited[country.index()] = true;

        for &next in graph.neighbours(country) {
            if visited[next.index()] {
                continue;
            }
            let candidate = cost.saturating_add(graph.edge_cost(country, next));
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    DistanceTable { dist }
}
