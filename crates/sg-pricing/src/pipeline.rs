//! The end-to-end pricing pass.
//!
//! Control flow, leaves first: grid → capitals → adjacency → capital graph →
//! one distance table per source country → cost matrix.  Every stage output
//! is an explicit value passed to the next stage; nothing is stashed in
//! globals, so the pass is reentrant and each stage testable in isolation.

use tracing::{debug, info};

use sg_core::{CountryId, PanelId};
use sg_map::{WorldGrid, build_adjacency, locate_capitals};
use sg_route::{CapitalGraph, shortest_distances};

use crate::{PricingError, PricingResult, SolarPanel, panel_cost};

// ── PriceMatrix ───────────────────────────────────────────────────────────────

/// Per-source-country cost rows.
///
/// Row `c` prices every panel (in input order) against country `c`'s capital
/// as the shortest-path source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMatrix {
    rows: Vec<Vec<u64>>,
}

impl PriceMatrix {
    /// Assemble a matrix from pre-computed rows (row index = source country).
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        Self { rows }
    }

    /// All rows, indexed by source country id.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Costs for one source country, in panel input order.
    pub fn row(&self, country: CountryId) -> &[u64] {
        &self.rows[country.index()]
    }
}

// ── PricingRun ────────────────────────────────────────────────────────────────

/// Result of a full pricing pass.
pub struct PricingRun {
    /// The cost matrix, the batch output of the run.
    pub costs: PriceMatrix,
    /// The capital graph the costs were computed over.  Read-only view for
    /// presentation: capitals, neighbour lists and pairwise hop costs.
    pub graph: CapitalGraph,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Price every panel against every country's capital.
///
/// Rejects panels owned by a country id outside the grid's dense range
/// before any spatial work starts.  Fails if any country lacks a non-border
/// cell to host its capital — an invalid partition with no recovery policy.
pub fn price_panels(grid: &WorldGrid, panels: &[SolarPanel]) -> PricingResult<PricingRun> {
    let countries = grid.country_count();

    for (index, panel) in panels.iter().enumerate() {
        if panel.country.index() >= countries {
            return Err(PricingError::UnknownOwner {
                panel: PanelId(index as u32),
                country: panel.country,
                countries,
            });
        }
    }

    let capitals = locate_capitals(grid)?;
    let neighbours = build_adjacency(grid);
    let graph = CapitalGraph::new(capitals, neighbours)?;
    info!(countries, panels = panels.len(), "capital graph built");

    let mut rows = Vec::with_capacity(countries);
    for c in 0..countries {
        let source = CountryId(c as u16);
        let table = shortest_distances(&graph, source);
        debug!(%source, "distance table computed");
        rows.push(panels.iter().map(|p| panel_cost(p, &table)).collect());
    }
    info!("pricing pass complete");

    Ok(PricingRun { costs: PriceMatrix { rows }, graph })
}
