//! Integration tests for `#[derive(Record)]` and the in-memory record store.

use marketplace_catalog::{Catalog, CatalogConfig, InMemoryRecordStore, Record, RecordsExt};
use serde::{Deserialize, Serialize};

/// A saved search, keyed by a non-`id` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(collection = "saved_searches")]
struct SavedSearch {
    #[record(id)]
    pub slug: String,
    pub term: String,
}

/// Falls back to the `id` field and a derived collection name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
struct RecentView {
    pub id: String,
    pub listing_id: String,
}

#[test]
fn derive_reads_attributes() {
    let search = SavedSearch {
        slug: "cheap-bikes".into(),
        term: "bike".into(),
    };
    assert_eq!(SavedSearch::COLLECTION, "saved_searches");
    assert_eq!(search.id(), "cheap-bikes");
}

#[test]
fn derive_defaults_collection_and_id() {
    let view = RecentView {
        id: "v1".into(),
        listing_id: "8".into(),
    };
    assert_eq!(RecentView::COLLECTION, "recent_views");
    assert_eq!(view.id(), "v1");
}

#[test]
fn collections_are_kept_apart() {
    let store = InMemoryRecordStore::new();

    store
        .records::<SavedSearch>()
        .insert(&SavedSearch {
            slug: "1".into(),
            term: "lamp".into(),
        })
        .unwrap();
    store
        .records::<RecentView>()
        .insert(&RecentView {
            id: "1".into(),
            listing_id: "3".into(),
        })
        .unwrap();

    assert_eq!(store.records::<SavedSearch>().count().unwrap(), 1);
    assert_eq!(store.records::<RecentView>().count().unwrap(), 1);
    assert_eq!(
        store.records::<SavedSearch>().get("1").unwrap().unwrap().term,
        "lamp"
    );
}

#[test]
fn catalog_over_a_shared_store() {
    let store = InMemoryRecordStore::new();
    let catalog = Catalog::with_store(store.clone(), CatalogConfig::default()).unwrap();
    assert!(catalog.is_empty().unwrap());

    let demo = Catalog::demo().unwrap();
    for listing in demo.listings().unwrap() {
        store.records().insert(&listing).unwrap();
    }

    assert_eq!(catalog.len().unwrap(), demo.len().unwrap());
    assert_eq!(
        catalog.browse().unwrap().results().len(),
        demo.len().unwrap()
    );
}
