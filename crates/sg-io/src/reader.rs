//! Whitespace-separated integer token readers.
//!
//! # Pricing scenario format
//!
//! ```text
//! K
//! K × (owner_country_id, price)
//! ROWS COLS
//! ROWS×COLS × (altitude, country_id)    -- column-major: outer y, inner x
//! ```
//!
//! # Ray scenario format
//!
//! ```text
//! ROWS COLS N
//! N × (origin_x, origin_y, dir_x, dir_y)
//! ```
//!
//! Cell indices of a ray scenario run inclusive to ROWS/COLS.
//!
//! Both readers consume the whole stream: a leftover token is as much a
//! format error as a missing one.

use std::io::Read;
use std::path::Path;
use std::str::SplitAsciiWhitespace;

use sg_core::{Cell, CountryId, GridPoint};
use sg_map::WorldGrid;
use sg_pricing::SolarPanel;
use sg_ray::Ray;

use crate::{ReadError, ReadResult};

// ── Parsed scenarios ──────────────────────────────────────────────────────────

/// A fully parsed pricing scenario: the panels and the immutable grid.
pub struct Scenario {
    pub panels: Vec<SolarPanel>,
    pub grid: WorldGrid,
}

/// A fully parsed ray-traversal scenario.
pub struct RayScenario {
    /// Inclusive upper cell index on the x axis.
    pub max_x: i32,
    /// Inclusive upper cell index on the y axis.
    pub max_y: i32,
    pub rays: Vec<Ray>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a pricing scenario from a file.
pub fn read_scenario_file(path: &Path) -> ReadResult<Scenario> {
    let file = std::fs::File::open(path).map_err(ReadError::Io)?;
    read_scenario(file)
}

/// Like [`read_scenario_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn read_scenario<R: Read>(mut reader: R) -> ReadResult<Scenario> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let mut tokens = Tokens::new(&buf);

    let panel_count = tokens.next_count("panel count")?;
    let mut panels = Vec::with_capacity(panel_count);
    for _ in 0..panel_count {
        let country = tokens.next_country("panel owner")?;
        let price = tokens.next_in_range("panel price", 0, i64::from(u32::MAX))? as u32;
        panels.push(SolarPanel::new(country, price));
    }

    let rows = tokens.next_in_range("row count", 1, i64::from(i32::MAX))? as i32;
    let cols = tokens.next_in_range("column count", 1, i64::from(i32::MAX))? as i32;

    // Capacity hint only; an oversized product just truncates at input end.
    let cell_count = (rows as usize).saturating_mul(cols as usize);
    let mut cells = Vec::with_capacity(cell_count.min(1 << 24));
    for y in 0..cols {
        for x in 0..rows {
            let altitude =
                tokens.next_in_range("altitude", i64::from(i32::MIN), i64::from(i32::MAX))? as i32;
            let country = tokens.next_country("cell country")?;
            cells.push(Cell::new(x, y, altitude, country));
        }
    }
    tokens.finish()?;

    Ok(Scenario { panels, grid: WorldGrid::new(rows, cols, cells)? })
}

/// Read a ray-traversal scenario from a file.
pub fn read_rays_file(path: &Path) -> ReadResult<RayScenario> {
    let file = std::fs::File::open(path).map_err(ReadError::Io)?;
    read_rays(file)
}

/// Like [`read_rays_file`] but accepts any `Read` source.
pub fn read_rays<R: Read>(mut reader: R) -> ReadResult<RayScenario> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    let mut tokens = Tokens::new(&buf);

    let max_x = tokens.next_in_range("row count", 0, i64::from(i32::MAX))? as i32;
    let max_y = tokens.next_in_range("column count", 0, i64::from(i32::MAX))? as i32;
    let ray_count = tokens.next_count("ray count")?;

    let mut rays = Vec::with_capacity(ray_count);
    for _ in 0..ray_count {
        let ox = tokens.next_i32("ray origin x")?;
        let oy = tokens.next_i32("ray origin y")?;
        let dx = tokens.next_i32("ray direction x")?;
        let dy = tokens.next_i32("ray direction y")?;
        rays.push(Ray::new(GridPoint::new(ox, oy), GridPoint::new(dx, dy)));
    }
    tokens.finish()?;

    Ok(RayScenario { max_x, max_y, rays })
}

// ── Token cursor ──────────────────────────────────────────────────────────────

/// Cursor over a flat whitespace-separated integer stream, tracking the
/// token index for error messages.
struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
    index: usize,
}

impl<'a> Tokens<'a> {
    fn new(buf: &'a str) -> Self {
        Self { iter: buf.split_ascii_whitespace(), index: 0 }
    }

    fn next_i64(&mut self, expected: &'static str) -> ReadResult<i64> {
        let index = self.index;
        let token = self
            .iter
            .next()
            .ok_or(ReadError::Truncated { index, expected })?;
        self.index += 1;
        token
            .parse::<i64>()
            .map_err(|_| ReadError::InvalidToken { index, token: token.to_owned() })
    }

    fn next_in_range(&mut self, expected: &'static str, min: i64, max: i64) -> ReadResult<i64> {
        let index = self.index;
        let value = self.next_i64(expected)?;
        if value < min || value > max {
            return Err(ReadError::OutOfRange { index, expected, value });
        }
        Ok(value)
    }

    fn next_i32(&mut self, expected: &'static str) -> ReadResult<i32> {
        Ok(self.next_in_range(expected, i64::from(i32::MIN), i64::from(i32::MAX))? as i32)
    }

    fn next_count(&mut self, expected: &'static str) -> ReadResult<usize> {
        Ok(self.next_in_range(expected, 0, i64::from(u32::MAX))? as usize)
    }

    fn next_country(&mut self, expected: &'static str) -> ReadResult<CountryId> {
        Ok(CountryId(
            self.next_in_range(expected, 0, i64::from(u16::MAX - 1))? as u16,
        ))
    }

    /// The stream must be exhausted; leftover tokens are a format error.
    fn finish(mut self) -> ReadResult<()> {
        let count = self.iter.by_ref().count();
        if count > 0 {
            return Err(ReadError::Trailing { count });
        }
        Ok(())
    }
}
