use std::cmp::Ordering;

use tracing::debug;

use crate::listing::Listing;

use super::spec::{FilterSpec, SortOption};

/// A spec prepared for repeated evaluation: the search term is lower-cased once.
pub(crate) struct Matcher<'a> {
    spec: &'a FilterSpec,
    needle: Option<String>,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(spec: &'a FilterSpec) -> Self {
        let needle = (!spec.search_term().is_empty()).then(|| spec.search_term().to_lowercase());
        Self { spec, needle }
    }

    pub(crate) fn accepts(&self, listing: &Listing) -> bool {
        if let Some(needle) = &self.needle {
            if !listing.title_contains(needle) {
                return false;
            }
        }

        if !self.spec.price_range().contains(listing.price) {
            return false;
        }

        let categories = self.spec.categories();
        if !categories.is_empty() && !categories.contains(&listing.category) {
            return false;
        }

        let conditions = self.spec.conditions();
        if !conditions.is_empty() && !conditions.contains(&listing.condition) {
            return false;
        }

        true
    }
}

/// Filter and order `listings` according to `spec`.
///
/// Always starts from the collection it is given and never mutates it, so
/// running it twice with the same inputs yields the same output. Empty
/// selection sets and an empty search term impose no constraint.
pub fn apply_filters(listings: &[Listing], spec: &FilterSpec) -> Vec<Listing> {
    let matcher = Matcher::new(spec);
    let mut results: Vec<Listing> = listings
        .iter()
        .filter(|listing| matcher.accepts(listing))
        .cloned()
        .collect();

    sort_listings(&mut results, spec.sort());

    debug!(
        total = listings.len(),
        matched = results.len(),
        sort = %spec.sort(),
        "applied catalog filters"
    );

    results
}

/// Stable in-place sort. Listings that compare equal keep their relative order.
pub fn sort_listings(listings: &mut [Listing], sort: SortOption) {
    match sort {
        SortOption::PriceLow => listings.sort_by(|a, b| by_price(a.price, b.price)),
        SortOption::PriceHigh => listings.sort_by(|a, b| by_price(b.price, a.price)),
        SortOption::Newest => listings.sort_by(newest_first),
    }
}

// Numeric equality: `-0.0` and `0.0` tie, so they keep input order.
fn by_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// Ids without a numeric prefix go last.
fn newest_first(a: &Listing, b: &Listing) -> Ordering {
    match (a.recency_key(), b.recency_key()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
