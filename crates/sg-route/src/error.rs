//! Routing-subsystem error type.

use thiserror::Error;

use sg_core::CountryId;

/// Errors produced by `sg-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{capitals} capitals but {neighbour_lists} neighbour lists")]
    CountMismatch {
        capitals: usize,
        neighbour_lists: usize,
    },

    #[error("neighbour list of {country} references unknown {neighbour}")]
    UnknownCountry {
        country: CountryId,
        neighbour: CountryId,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
