//! `sg-pricing` — the solar panel cost rule and the batch pricing pipeline.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`panel`]    | `SolarPanel`                                     |
//! | [`cost`]     | `panel_cost` (price + capital distance)          |
//! | [`pipeline`] | `price_panels`, `PriceMatrix`, `PricingRun`      |
//! | [`error`]    | `PricingError`, `PricingResult<T>`               |

pub mod cost;
pub mod error;
pub mod panel;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use cost::panel_cost;
pub use error::{PricingError, PricingResult};
pub use panel::SolarPanel;
pub use pipeline::{PriceMatrix, PricingRun, price_panels};
