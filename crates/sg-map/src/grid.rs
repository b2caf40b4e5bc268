//! The partitioned world raster.
//!
//! # Orientation
//!
//! The input stream fills the grid column-major: the outer loop walks
//! columns (`y`), the inner loop rows (`x`).  `x` therefore ranges over
//! `0..rows` and `y` over `0..cols`, and cells are stored in exactly that
//! parse order.  The per-country cell lists built here preserve it, which
//! matters downstream: the capital fallback search resolves ties by scan
//! position.
//!
//! # Border rule
//!
//! A cell is a *border* cell when it sits on the outer edge of the grid or
//! when any of its four axis neighbours belongs to a different country.  The
//! outer-edge test fires first, so neighbour lookups only ever run on
//! interior cells and never index out of bounds.

use sg_core::{Cell, CountryId, GridPoint};

use crate::{MapError, MapResult};

/// Immutable rows × cols raster with precomputed per-country cell lists.
///
/// Built once at parse time; every later pipeline stage only issues pure
/// queries against it.
pub struct WorldGrid {
    rows: i32,
    cols: i32,
    /// All cells in parse order (outer `y`, inner `x`).
    cells: Vec<Cell>,
    /// Cell indices per country, in parse order.  Indexed by `CountryId`.
    country_cells: Vec<Vec<u32>>,
}

impl WorldGrid {
    /// Build a grid from cells listed in parse order.
    ///
    /// Validates the dimensions, that every cell sits where the parse order
    /// says it should, and that country ids are dense over `[0, N)` — every
    /// id up to the largest one seen must own at least one cell.
    pub fn new(rows: i32, cols: i32, cells: Vec<Cell>) -> MapResult<Self> {
        if rows < 1 || cols < 1 {
            return Err(MapError::EmptyGrid);
        }
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(MapError::CellCount { rows, cols, expected, got: cells.len() });
        }

        let mut max_country = 0usize;
        for (index, cell) in cells.iter().enumerate() {
            let x = (index % rows as usize) as i32;
            let y = (index / rows as usize) as i32;
            if cell.x != x || cell.y != y {
                return Err(MapError::CellOrder { index, x: cell.x, y: cell.y });
            }
            max_country = max_country.max(cell.country.index());
        }

        let mut country_cells = vec![Vec::new(); max_country + 1];
        for (index, cell) in cells.iter().enumerate() {
            country_cells[cell.country.index()].push(index as u32);
        }
        for (id, list) in country_cells.iter().enumerate() {
            if list.is_empty() {
                return Err(MapError::SparseCountryIds(CountryId(id as u16)));
            }
        }

        Ok(Self { rows, cols, cells, country_cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of countries in the partition (ids are dense, so this is
    /// `max id + 1`).
    pub fn country_count(&self) -> usize {
        self.country_cells.len()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// The cell at `p`.  `p` must lie inside the grid; centroid points of
    /// any country always do.
    #[inline]
    pub fn cell_at(&self, p: GridPoint) -> &Cell {
        debug_assert!(p.x >= 0 && p.x < self.rows && p.y >= 0 && p.y < self.cols);
        &self.cells[p.y as usize * self.rows as usize + p.x as usize]
    }

    /// All cells in parse order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every cell of `country`, in parse order.
    pub fn cells_of(&self, country: CountryId) -> impl Iterator<Item = &Cell> {
        self.country_cells[country.index()]
            .iter()
            .map(|&i| &self.cells[i as usize])
    }

    // ── Border classification ─────────────────────────────────────────────

    /// `true` when the cell sits on the outer edge of the grid.
    #[inline]
    pub fn on_outer_edge(&self, cell: &Cell) -> bool {
        cell.x == 0 || cell.y == 0 || cell.x == self.rows - 1 || cell.y == self.cols - 1
    }

    /// `true` when the cell is a border cell: on the outer edge, or with at
    /// least one axis neighbour of a different country.
    pub fn is_border(&self, cell: &Cell) -> bool {
        if self.on_outer_edge(cell) {
            return true;
        }
        self.axis_neighbours(cell)
            .iter()
            .any(|n| n.country != cell.country)
    }

    /// The four axis neighbours (left, right, down, up) of an interior cell.
    ///
    /// Must not be called for cells on the outer edge.
    pub(crate) fn axis_neighbours(&self, cell: &Cell) -> [&Cell; 4] {
        debug_assert!(!self.on_outer_edge(cell));
        [
            self.cell_at(GridPoint::new(cell.x - 1, cell.y)),
            self.cell_at(GridPoint::new(cell.x + 1, cell.y)),
            self.cell_at(GridPoint::new(cell.x, cell.y - 1)),
            self.cell_at(GridPoint::new(cell.x, cell.y + 1)),
        ]
    }
}
