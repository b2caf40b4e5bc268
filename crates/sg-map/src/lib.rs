//! `sg-map` — the partitioned world raster and its spatial queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`grid`]      | `WorldGrid`: border rule, per-country cell lists    |
//! | [`capitals`]  | `locate_capitals`, `capital_of`                     |
//! | [`adjacency`] | `build_adjacency` (4-connected, edge-exclusion)     |
//! | [`error`]     | `MapError`, `MapResult<T>`                          |

pub mod adjacency;
pub mod capitals;
pub mod error;
pub mod grid;


pub use adjacency::build_adjacency;
pub use capitals::{capital_of, locate_capitals};
pub use error::{MapError, MapResult};
pub use grid::WorldGrid;
