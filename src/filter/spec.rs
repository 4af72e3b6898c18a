use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR};
use crate::error::{CatalogError, Result};
use crate::listing::{Condition, Listing};

use super::engine::Matcher;

/// Closed price interval `[min, max]`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Build a range. Bounds must be finite, non-negative and ordered.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(CatalogError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when this range excludes part of `bounds`.
    pub fn is_narrower_than(&self, bounds: &PriceRange) -> bool {
        self.min > bounds.min || self.max < bounds.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_FLOOR,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

impl TryFrom<[f64; 2]> for PriceRange {
    type Error = CatalogError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self> {
        PriceRange::new(min, max)
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Highest numeric id first.
    #[default]
    Newest,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
        }
    }

    /// Human label for a sort picker.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

/// Every constraint the browse view can place on the listing collection.
///
/// A `FilterSpec` is a value: each edit returns a new spec and the caller
/// replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    search_term: String,
    price_range: PriceRange,
    categories: BTreeSet<String>,
    conditions: BTreeSet<Condition>,
    sort: SortOption,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::cleared(PriceRange::default())
    }
}

impl FilterSpec {
    /// The cleared spec: no search, the full storewide price range, nothing
    /// selected, newest first.
    pub fn cleared(bounds: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            price_range: bounds,
            categories: BTreeSet::new(),
            conditions: BTreeSet::new(),
            sort: SortOption::Newest,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn conditions(&self) -> &BTreeSet<Condition> {
        &self.conditions
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn with_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    pub fn with_price_range(self, price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortOption) -> Self {
        Self { sort, ..self }
    }

    pub fn with_categories<I, S>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_conditions<I>(self, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        Self {
            conditions: conditions.into_iter().collect(),
            ..self
        }
    }

    /// Select `category` if unselected, otherwise deselect it.
    pub fn toggle_category(mut self, category: &str) -> Self {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
        self
    }

    /// Select `condition` if unselected, otherwise deselect it.
    pub fn toggle_condition(mut self, condition: Condition) -> Self {
        if !self.conditions.remove(&condition) {
            self.conditions.insert(condition);
        }
        self
    }

    /// True when no predicate would remove anything from a catalog priced
    /// within `bounds`. The sort option is not a constraint.
    pub fn is_unconstrained(&self, bounds: &PriceRange) -> bool {
        self.search_term.is_empty()
            && !self.price_range.is_narrower_than(bounds)
            && self.categories.is_empty()
            && self.conditions.is_empty()
    }

    /// Whether `listing` passes every active predicate.
    pub fn matches(&self, listing: &Listing) -> bool {
        Matcher::new(self).accepts(listing)
    }
}
