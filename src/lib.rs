//! Browsing layer for a peer-to-peer marketplace demo.
//!
//! Listings live in an in-memory [`Catalog`]. A [`BrowseSession`] holds the
//! current [`FilterSpec`] and runs [`apply_filters`], a pure filter/sort over
//! the catalog's listings, whenever the view applies, searches or clears.

// Lets `#[derive(Record)]` expand to `marketplace_catalog::Record` inside this crate.
extern crate self as marketplace_catalog;

mod browse;
mod catalog;
mod config;
mod error;
mod filter;
mod listing;
mod record;
mod wishlist;

pub use browse::BrowseSession;
pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR};
pub use error::{CatalogError, Result};
pub use filter::{
    apply_filters, sort_listings, ActiveFilter, FilterSpec, PriceRange, ResultSummary, SortOption,
};
pub use listing::{Category, Condition, Listing, Seller};
pub use record::{InMemoryRecordStore, Record, RecordRepository, RecordStore, RecordsExt};
pub use wishlist::Wishlist;

// Re-export the derive macro alongside the trait it implements
pub use marketplace_catalog_macros::Record;
