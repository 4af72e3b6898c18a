//! Catalog configuration: storewide price bounds and display limits.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::PriceRange;

/// Default lower bound of the storewide price range.
pub const DEFAULT_PRICE_FLOOR: f64 = 0.0;
/// Default upper bound of the storewide price range.
pub const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Settings shared by a catalog and every browse session opened on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Lowest selectable price; the default lower bound of the price filter.
    pub price_floor: f64,
    /// Highest selectable price; the default upper bound of the price filter.
    pub price_ceiling: f64,
    /// Price slider granularity. Display-only.
    pub price_step: f64,
    /// Maximum number of related listings shown next to a listing.
    pub related_limit: usize,
    /// Maximum number of featured listings.
    pub featured_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_floor: DEFAULT_PRICE_FLOOR,
            price_ceiling: DEFAULT_PRICE_CEILING,
            price_step: 10.0,
            related_limit: 4,
            featured_limit: 8,
        }
    }
}

impl CatalogConfig {
    /// The storewide price range. Fails if the floor is above the ceiling.
    pub fn price_bounds(&self) -> Result<PriceRange> {
        PriceRange::new(self.price_floor, self.price_ceiling)
    }
}
