//! Catalog filter/sort engine.
//!
//! [`apply_filters`] is a pure function of a listing slice and a [`FilterSpec`]:
//! it keeps the listings that pass every active predicate and orders them by
//! the spec's [`SortOption`].
//!
//! ## Example
//!
//! ```ignore
//! use marketplace_catalog::{apply_filters, FilterSpec, PriceRange, SortOption};
//!
//! let spec = FilterSpec::cleared(catalog.price_bounds()?)
//!     .toggle_category("Books")
//!     .with_price_range(PriceRange::new(0.0, 100.0)?)
//!     .with_sort(SortOption::PriceLow);
//!
//! let visible = apply_filters(&catalog.listings()?, &spec);
//! ```

mod active;
mod engine;
mod spec;
mod summary;

pub use active::ActiveFilter;
pub use engine::{apply_filters, sort_listings};
pub use spec::{FilterSpec, PriceRange, SortOption};
pub use summary::ResultSummary;
