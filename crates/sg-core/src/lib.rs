//! `sg-core` — foundational types for the `solargrid` pricing pipeline.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `CountryId`, `PanelId`                    |
//! | [`point`]   | `GridPoint`, Manhattan / truncated Euclid |
//! | [`cell`]    | `Cell` (position, altitude, country)      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod ids;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use ids::{CountryId, PanelId};
pub use point::GridPoint;
