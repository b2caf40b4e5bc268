//! `sg-route` — the inter-capital graph and shortest distances.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`graph`]    | `CapitalGraph` (dense, index-based)                  |
//! | [`dijkstra`] | `shortest_distances`, `DistanceTable`, `UNREACHED`   |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                       |

pub mod dijkstra;
pub mod error;
pub mod graph;


pub use dijkstra::{DistanceTable, UNREACHED, shortest_distances};
pub use error::{RouteError, RouteResult};
pub use graph::CapitalGraph;
