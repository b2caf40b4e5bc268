//! Unit tests for sg-pricing.

#[cfg(test)]
mod helpers {
    use sg_core::{Cell, CountryId};
    use sg_map::WorldGrid;

    /// Build a grid in parse order from a country assignment closure.
    pub fn grid_with(rows: i32, cols: i32, country_at: impl Fn(i32, i32) -> u16) -> WorldGrid {
        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for y in 0..cols {
            for x in 0..rows {
                cells.push(Cell::new(x, y, 0, CountryId(country_at(x, y))));
            }
        }
        WorldGrid::new(rows, cols, cells).unwrap()
    }

    /// 6×9 grid split into two horizontal strips: country 0 on y < 4,
    /// country 1 on the rest.  Capitals land at (2,1) and (2,6), five apart.
    pub fn two_country_grid() -> WorldGrid {
        grid_with(6, 9, |_, y| if y < 4 { 0 } else { 1 })
    }
}

// ── Cost rule ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use sg_core::{CountryId, GridPoint};
    use sg_route::{CapitalGraph, UNREACHED, shortest_distances};

    use crate::{SolarPanel, panel_cost};

    #[test]
    fn price_plus_distance() {
        let g = CapitalGraph::new(
            vec![GridPoint::new(0, 0), GridPoint::new(3, 4)],
            vec![vec![CountryId(1)], vec![CountryId(0)]],
        )
        .unwrap();
        let table = shortest_distances(&g, CountryId(0));

        let panel = SolarPanel::new(CountryId(1), 7);
        assert_eq!(panel_cost(&panel, &table), 7 + 5);
    }

    #[test]
    fn monotonic_in_price() {
        let g = CapitalGraph::new(
            vec![GridPoint::new(0, 0), GridPoint::new(3, 4)],
            vec![vec![CountryId(1)], vec![CountryId(0)]],
        )
        .unwrap();
        let table = shortest_distances(&g, CountryId(0));

        let base = panel_cost(&SolarPanel::new(CountryId(1), 100), &table);
        let bumped = panel_cost(&SolarPanel::new(CountryId(1), 100 + 37), &table);
        assert_eq!(bumped - base, 37);
    }

    #[test]
    fn unreachable_owner_carries_sentinel() {
        // No edges: country 1 is unreachable from country 0.
        let g = CapitalGraph::new(
            vec![GridPoint::new(0, 0), GridPoint::new(9, 9)],
            vec![vec![], vec![]],
        )
        .unwrap();
        let table = shortest_distances(&g, CountryId(0));

        let panel = SolarPanel::new(CountryId(1), 25);
        assert_eq!(panel_cost(&panel, &table), 25 + u64::from(UNREACHED));
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use sg_core::{CountryId, GridPoint};
    use sg_map::{build_adjacency, capital_of};
    use sg_route::{CapitalGraph, shortest_distances};

    use crate::{PricingError, SolarPanel, panel_cost, price_panels};

    #[test]
    fn own_capital_prices_at_face_value() {
        // 3×3 grid owned by country 0 except the (0,0) corner.  The corner
        // country has no inland cell (and so no capital), but country 0's
        // capital settles at the center and its asset costs exactly its
        // price when priced from its own capital.
        let grid = super::helpers::grid_with(3, 3, |x, y| {
            if x == 0 && y == 0 { 1 } else { 0 }
        });

        let capital = capital_of(&grid, CountryId(0)).unwrap();
        assert_eq!(capital, GridPoint::new(1, 1));

        let adjacency = build_adjacency(&grid);
        assert!(adjacency[0].is_empty());

        let graph = CapitalGraph::new(vec![capital], vec![adjacency[0].clone()]).unwrap();
        let table = shortest_distances(&graph, CountryId(0));

        let panel = SolarPanel::new(CountryId(0), 10);
        assert_eq!(panel_cost(&panel, &table), 10);
    }

    #[test]
    fn two_country_matrix() {
        let grid = super::helpers::two_country_grid();
        let panels = [
            SolarPanel::new(CountryId(0), 10),
            SolarPanel::new(CountryId(1), 7),
        ];

        let run = price_panels(&grid, &panels).unwrap();

        // Capitals (2,1) and (2,6): hop cost 5 in both directions.
        assert_eq!(run.graph.capital(CountryId(0)), GridPoint::new(2, 1));
        assert_eq!(run.graph.capital(CountryId(1)), GridPoint::new(2, 6));
        assert_eq!(run.costs.row(CountryId(0)), &[10, 12]);
        assert_eq!(run.costs.row(CountryId(1)), &[15, 7]);
    }

    #[test]
    fn unknown_owner_rejected() {
        let grid = super::helpers::two_country_grid();
        let panels = [SolarPanel::new(CountryId(5), 1)];
        assert!(matches!(
            price_panels(&grid, &panels),
            Err(PricingError::UnknownOwner { country: CountryId(5), countries: 2, .. })
        ));
    }

    #[test]
    fn no_panels_yields_empty_rows() {
        let grid = super::helpers::two_country_grid();
        let run = price_panels(&grid, &[]).unwrap();
        assert_eq!(run.costs.rows().len(), 2);
        assert!(run.costs.rows().iter().all(|r| r.is_empty()));
    }

    #[test]
    fn identical_input_identical_output() {
        let grid = super::helpers::two_country_grid();
        let panels = [
            SolarPanel::new(CountryId(0), 3),
            SolarPanel::new(CountryId(1), 11),
            SolarPanel::new(CountryId(0), 0),
        ];
        let first = price_panels(&grid, &panels).unwrap();
        let second = price_panels(&grid, &panels).unwrap();
        assert_eq!(first.costs, second.costs);
    }
}

// ── Randomized property checks ────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use sg_core::{Cell, CountryId};
    use sg_map::{WorldGrid, locate_capitals};

    use crate::{SolarPanel, price_panels};

    /// Random two-strip partitions with random altitudes and prices.  Strip
    /// widths ≥ 3 guarantee every country an inland cell.
    fn random_grid(rng: &mut SmallRng) -> WorldGrid {
        let rows = rng.gen_range(5..=9);
        let cols = rng.gen_range(7..=12);
        let split = rng.gen_range(3..=cols - 3);

        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for y in 0..cols {
            for x in 0..rows {
                let country = if y < split { 0 } else { 1 };
                cells.push(Cell::new(x, y, rng.gen_range(-100..100), CountryId(country)));
            }
        }
        WorldGrid::new(rows, cols, cells).unwrap()
    }

    #[test]
    fn capitals_stay_inland_and_own_panels_cost_face_value() {
        let mut rng = SmallRng::seed_from_u64(0x5047);

        for _ in 0..25 {
            let grid = random_grid(&mut rng);
            let panels: Vec<SolarPanel> = (0..4)
                .map(|i| SolarPanel::new(CountryId(i % 2), rng.gen_range(0..1_000)))
                .collect();

            let capitals = locate_capitals(&grid).unwrap();
            for (id, capital) in capitals.iter().enumerate() {
                let cell = grid.cell_at(*capital);
                assert_eq!(cell.country, CountryId(id as u16));
                assert!(!grid.is_border(cell));
            }

            let run = price_panels(&grid, &panels).unwrap();
            let rerun = price_panels(&grid, &panels).unwrap();
            assert_eq!(run.costs, rerun.costs);

            for c in 0..grid.country_count() {
                let source = CountryId(c as u16);
                for (i, panel) in panels.iter().enumerate() {
                    let cost = run.costs.row(source)[i];
                    // A panel at the source's own capital costs its price;
                    // anything else costs at least that.
                    if panel.country == source {
                        assert_eq!(cost, u64::from(panel.price));
                    } else {
                        assert!(cost >= u64::from(panel.price));
                    }
                }
            }
        }
    }
}
