//! Pricing-subsystem error type.

use thiserror::Error;

use sg_core::{CountryId, PanelId};
use sg_map::MapError;
use sg_route::RouteError;

/// Errors produced by `sg-pricing`.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("panel {panel} is owned by {country}, but the grid has {countries} countries")]
    UnknownOwner {
        panel: PanelId,
        country: CountryId,
        countries: usize,
    },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type PricingResult<T> = Result<T, PricingError>;
