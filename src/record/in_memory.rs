//! InMemoryRecordStore - Insertion-ordered, HashMap-indexed record store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Record, RecordStore};
use crate::error::{CatalogError, Result};

/// One collection: serialized rows plus the order they were first inserted in.
#[derive(Default)]
struct Collection {
    order: Vec<String>,
    rows: HashMap<String, Vec<u8>>,
}

impl Collection {
    fn decode_all<M: Record>(&self) -> Result<Vec<M>> {
        self.order
            .iter()
            .filter_map(|id| self.rows.get(id))
            .map(|bytes| serde_json::from_slice(bytes).map_err(CatalogError::from))
            .collect()
    }
}

/// In-memory record store. Collections are keyed by `Record::COLLECTION`.
///
/// Clone-friendly via Arc; clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<HashMap<String, Collection>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Collection>>> {
        self.storage
            .read()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Collection>>> {
        self.storage
            .write()
            .map_err(|_| CatalogError::Storage("lock poisoned".into()))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get_record<M: Record>(&self, id: &str) -> Result<Option<M>> {
        let storage = self.read()?;
        let Some(bytes) = storage
            .get(M::COLLECTION)
            .and_then(|collection| collection.rows.get(id))
        else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(bytes)?))
    }

    fn insert<M: Record>(&self, record: &M) -> Result<()> {
        let bytes = serde_json::to_vec(record)?;
        let mut storage = self.write()?;
        let collection = storage.entry(M::COLLECTION.to_string()).or_default();

        if collection.rows.contains_key(record.id()) {
            return Err(CatalogError::DuplicateRecord {
                collection: M::COLLECTION.to_string(),
                id: record.id().to_string(),
            });
        }

        collection.order.push(record.id().to_string());
        collection.rows.insert(record.id().to_string(), bytes);
        Ok(())
    }

    fn upsert<M: Record>(&self, record: &M) -> Result<()> {
        let bytes = serde_json::to_vec(record)?;
        let mut storage = self.write()?;
        let collection = storage.entry(M::COLLECTION.to_string()).or_default();

        if collection
            .rows
            .insert(record.id().to_string(), bytes)
            .is_none()
        {
            collection.order.push(record.id().to_string());
        }
        Ok(())
    }

    fn all_records<M: Record>(&self) -> Result<Vec<M>> {
        let storage = self.read()?;
        match storage.get(M::COLLECTION) {
            Some(collection) => collection.decode_all(),
            None => Ok(Vec::new()),
        }
    }

    fn find_records<M: Record>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>> {
        let mut records = self.all_records::<M>()?;
        records.retain(|record| predicate(record));
        Ok(records)
    }

    fn find_one_record<M: Record>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>> {
        let storage = self.read()?;
        let Some(collection) = storage.get(M::COLLECTION) else {
            return Ok(None);
        };

        for id in &collection.order {
            if let Some(bytes) = collection.rows.get(id) {
                let record: M = serde_json::from_slice(bytes)?;
                if predicate(&record) {
                    return Ok(Some(record));
                }
            }
        }

        Ok(None)
    }

    fn count<M: Record>(&self) -> Result<usize> {
        let storage = self.read()?;
        Ok(storage
            .get(M::COLLECTION)
            .map(|collection| collection.order.len())
            .unwrap_or(0))
    }
}
