//! Records - Typed, insertion-ordered storage for catalog data.
//!
//! A record store holds any number of collections side by side. Records keep
//! the order they were first inserted in, which is the order the browse layer
//! treats as "input order" for stable sorting.
//!
//! ## Example
//!
//! ```ignore
//! use marketplace_catalog::{InMemoryRecordStore, Record, RecordsExt};
//!
//! #[derive(Serialize, Deserialize, Clone, Record)]
//! #[record(collection = "listings")]
//! struct Listing {
//!     #[record(id)]
//!     pub id: String,
//!     pub price: f64,
//! }
//!
//! let store = InMemoryRecordStore::new();
//! store.records::<Listing>().insert(&listing)?;
//! let loaded = store.records::<Listing>().get("1")?;
//! ```

mod in_memory;
mod repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be kept in a record store.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "listings", "categories").
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record within its collection.
    fn id(&self) -> &str;
}

pub use in_memory::InMemoryRecordStore;
pub use repository::{RecordRepository, RecordsExt};
pub use store::RecordStore;
