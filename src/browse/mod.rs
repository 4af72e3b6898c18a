//! BrowseSession - The browse view's filter state and displayed results.
//!
//! The session keeps the listing collection it was opened on, the pending
//! [`FilterSpec`] and the last applied result. Widget edits replace the spec
//! wholesale via [`BrowseSession::set_spec`]; nothing is re-filtered until
//! [`BrowseSession::apply`] (or an operation that applies) runs.

use tracing::info;

use crate::filter::{apply_filters, ActiveFilter, FilterSpec, PriceRange, ResultSummary};
use crate::listing::Listing;

/// Filter state for one browse view.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    source: Vec<Listing>,
    bounds: PriceRange,
    spec: FilterSpec,
    results: Vec<Listing>,
}

impl BrowseSession {
    /// Start with cleared filters, showing `source` in its given order.
    pub fn new(source: Vec<Listing>, bounds: PriceRange) -> Self {
        Self {
            results: source.clone(),
            spec: FilterSpec::cleared(bounds),
            source,
            bounds,
        }
    }

    /// The pending spec. May differ from what produced [`results`](Self::results)
    /// until the next apply.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// The displayed listings.
    pub fn results(&self) -> &[Listing] {
        &self.results
    }

    pub fn price_bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.results.len())
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.spec.active_filters(&self.bounds)
    }

    /// Replace the pending spec without re-filtering.
    pub fn set_spec(&mut self, spec: FilterSpec) {
        self.spec = spec;
    }

    /// Run the engine on the full source collection and replace the results.
    pub fn apply(&mut self) -> &[Listing] {
        self.results = apply_filters(&self.source, &self.spec);
        info!(
            shown = self.results.len(),
            sort = %self.spec.sort(),
            "browse filters applied"
        );
        &self.results
    }

    /// Replace the spec and apply it.
    pub fn update(&mut self, spec: FilterSpec) -> &[Listing] {
        self.set_spec(spec);
        self.apply()
    }

    /// Submit a search term, keeping every other constraint.
    pub fn search(&mut self, term: impl Into<String>) -> &[Listing] {
        let spec = self.spec.clone().with_search_term(term);
        self.update(spec)
    }

    /// Remove one active filter and apply.
    pub fn remove_filter(&mut self, filter: &ActiveFilter) -> &[Listing] {
        let spec = self.spec.clone().without(filter, self.bounds);
        self.update(spec)
    }

    /// Reset every field to its default (newest first) and apply.
    pub fn clear_filters(&mut self) -> &[Listing] {
        info!("browse filters cleared");
        self.update(FilterSpec::cleared(self.bounds))
    }
}
