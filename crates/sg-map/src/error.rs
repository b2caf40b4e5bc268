//! Map-subsystem error type.

use thiserror::Error;

use sg_core::CountryId;

/// Errors produced by `sg-map`.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("expected {expected} cells for a {rows}x{cols} grid, got {got}")]
    CellCount {
        rows: i32,
        cols: i32,
        expected: usize,
        got: usize,
    },

    #[error("cell {index} is at ({x}, {y}), out of parse order")]
    CellOrder { index: usize, x: i32, y: i32 },

    #[error("country ids are not dense: {0} owns no cells")]
    SparseCountryIds(CountryId),

    #[error("country {country} has no non-border cell to host a capital")]
    NoInlandCell { country: CountryId },
}

pub type MapResult<T> = Result<T, MapError>;
