//! The immutable per-cell value of the world raster.

use crate::{CountryId, GridPoint};

/// One grid cell: position, altitude, owning country.
///
/// Altitude is parsed and carried but not consumed by the pricing pipeline;
/// it is reserved for terrain-aware cost extensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub altitude: i32,
    pub country: CountryId,
}

impl Cell {
    #[inline]
    pub fn new(x: i32, y: i32, altitude: i32, country: CountryId) -> Self {
        Self { x, y, altitude, country }
    }

    /// The cell's coordinate, dropping altitude and ownership.
    #[inline]
    pub fn point(&self) -> GridPoint {
        GridPoint::new(self.x, self.y)
    }
}
