//! Catalog - The listing collection the browse layer reads from.
//!
//! A catalog is loaded once (usually from a JSON fixture) and stays fixed for
//! the session. Listings keep fixture order, which is the "input order" every
//! stable sort preserves.

mod fixture;

use tracing::debug;

use crate::browse::BrowseSession;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::filter::PriceRange;
use crate::listing::{Category, Listing};
use crate::record::{InMemoryRecordStore, RecordStore, RecordsExt};

use fixture::Fixture;

const DEMO_FIXTURE: &str = include_str!("../../data/demo_catalog.json");

/// Listings and categories plus the settings browse sessions start from.
#[derive(Clone)]
pub struct Catalog<S = InMemoryRecordStore> {
    store: S,
    config: CatalogConfig,
    bounds: PriceRange,
}

impl Catalog<InMemoryRecordStore> {
    /// An empty in-memory catalog.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Self::with_store(InMemoryRecordStore::new(), config)
    }

    /// An in-memory catalog seeded with `categories` and `listings`, in order.
    /// Fails on a repeated id.
    pub fn with_listings(
        config: CatalogConfig,
        categories: impl IntoIterator<Item = Category>,
        listings: impl IntoIterator<Item = Listing>,
    ) -> Result<Self> {
        let catalog = Self::new(config)?;
        for category in categories {
            catalog.store.insert(&category)?;
        }
        for listing in listings {
            catalog.store.insert(&listing)?;
        }
        Ok(catalog)
    }

    /// Load a fixture document: `{ "config"?, "categories"?, "listings" }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        let listing_count = fixture.listings.len();
        let category_count = fixture.categories.len();

        let catalog = Self::with_listings(fixture.config, fixture.categories, fixture.listings)?;
        debug!(
            listings = listing_count,
            categories = category_count,
            "loaded catalog fixture"
        );
        Ok(catalog)
    }

    /// The bundled demo catalog.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_FIXTURE)
    }
}

impl<S: RecordStore> Catalog<S> {
    /// Wrap an existing store. Fails if the configured price bounds are invalid.
    pub fn with_store(store: S, config: CatalogConfig) -> Result<Self> {
        let bounds = config.price_bounds()?;
        Ok(Self {
            store,
            config,
            bounds,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Storewide price range; the price filter's default.
    pub fn price_bounds(&self) -> PriceRange {
        self.bounds
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every listing, in catalog order.
    pub fn listings(&self) -> Result<Vec<Listing>> {
        self.store.records::<Listing>().all()
    }

    pub fn listing(&self, id: &str) -> Result<Option<Listing>> {
        self.store.records::<Listing>().get(id)
    }

    pub fn len(&self) -> Result<usize> {
        self.store.records::<Listing>().count()
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        self.store.records::<Category>().all()
    }

    /// Listings flagged as featured, capped at `featured_limit`.
    pub fn featured(&self) -> Result<Vec<Listing>> {
        let mut featured = self.store.records::<Listing>().find(&|l| l.featured)?;
        featured.truncate(self.config.featured_limit);
        Ok(featured)
    }

    /// Other listings in the same category as `id`, capped at `related_limit`.
    /// An unknown id has no related listings.
    pub fn related(&self, id: &str) -> Result<Vec<Listing>> {
        let Some(source) = self.listing(id)? else {
            return Ok(Vec::new());
        };

        let mut related = self
            .store
            .records::<Listing>()
            .find(&|l| l.category == source.category && l.id != source.id)?;
        related.truncate(self.config.related_limit);
        Ok(related)
    }

    /// Open a browse session over the current listings with cleared filters.
    pub fn browse(&self) -> Result<BrowseSession> {
        Ok(BrowseSession::new(self.listings()?, self.bounds))
    }
}
