//! Wishlist - Listings a shopper has saved for later.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::listing::Listing;
use crate::record::RecordStore;

/// Saved listing ids, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wishlist holding the first `count` catalog listings.
    pub fn seeded<S: RecordStore>(catalog: &Catalog<S>, count: usize) -> Result<Self> {
        let mut wishlist = Self::new();
        for listing in catalog.listings()?.into_iter().take(count) {
            wishlist.save(&listing.id);
        }
        Ok(wishlist)
    }

    /// Save `id`. Returns false if it was already saved.
    pub fn save(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove `id`. Returns false if it was not saved.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| saved != id);
        self.ids.len() != before
    }

    /// Flip the saved state of `id` and return the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.save(id)
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve saved ids against `catalog`, in saved order. Ids the catalog
    /// does not know are skipped.
    pub fn listings<S: RecordStore>(&self, catalog: &Catalog<S>) -> Result<Vec<Listing>> {
        let mut listings = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            if let Some(listing) = catalog.listing(id)? {
                listings.push(listing);
            }
        }
        Ok(listings)
    }
}
