//! The solar panel asset.

use sg_core::CountryId;

/// One solar panel: owning country and intrinsic price.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolarPanel {
    pub country: CountryId,
    pub price: u32,
}

impl SolarPanel {
    #[inline]
    pub fn new(country: CountryId, price: u32) -> Self {
        Self { country, price }
    }
}
