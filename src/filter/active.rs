use std::fmt;

use crate::listing::Condition;

use super::spec::{FilterSpec, PriceRange};

/// One constraint currently narrowing the results, shown as a removable chip.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveFilter {
    Search(String),
    Category(String),
    Condition(Condition),
    Price(PriceRange),
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveFilter::Search(term) => f.write_str(term),
            ActiveFilter::Category(category) => write!(f, "Category: {}", category),
            ActiveFilter::Condition(condition) => write!(f, "Condition: {}", condition),
            ActiveFilter::Price(range) => write!(f, "Price: {}", range),
        }
    }
}

impl FilterSpec {
    /// Chips for every active constraint: search, categories, conditions, then
    /// price. Price shows only when narrower than `bounds`.
    pub fn active_filters(&self, bounds: &PriceRange) -> Vec<ActiveFilter> {
        let mut active = Vec::new();

        if !self.search_term().is_empty() {
            active.push(ActiveFilter::Search(self.search_term().to_string()));
        }
        active.extend(self.categories().iter().cloned().map(ActiveFilter::Category));
        active.extend(self.conditions().iter().copied().map(ActiveFilter::Condition));
        if self.price_range().is_narrower_than(bounds) {
            active.push(ActiveFilter::Price(self.price_range()));
        }

        active
    }

    /// Drop one chip. Price resets to `bounds`.
    pub fn without(self, filter: &ActiveFilter, bounds: PriceRange) -> Self {
        match filter {
            ActiveFilter::Search(_) => self.with_search_term(""),
            ActiveFilter::Category(category) => {
                if self.categories().contains(category) {
                    self.toggle_category(category)
                } else {
                    self
                }
            }
            ActiveFilter::Condition(condition) => {
                if self.conditions().contains(condition) {
                    self.toggle_condition(*condition)
                } else {
                    self
                }
            }
            ActiveFilter::Price(_) => self.with_price_range(bounds),
        }
    }
}
