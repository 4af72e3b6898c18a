//! RecordRepository - Typed accessor for one record collection.

use std::marker::PhantomData;

use super::{Record, RecordStore};
use crate::error::Result;

/// Typed repository wrapper for accessing records of a specific type.
///
/// Provides clean short method names by delegating to `RecordStore` trait methods.
pub struct RecordRepository<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> RecordRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Result<Option<M>> {
        self.store.get_record(id)
    }

    /// Insert a new record. Fails if it already exists.
    pub fn insert(&self, record: &M) -> Result<()> {
        self.store.insert(record)
    }

    /// Insert or replace a record.
    pub fn upsert(&self, record: &M) -> Result<()> {
        self.store.upsert(record)
    }

    /// All records, in insertion order.
    pub fn all(&self) -> Result<Vec<M>> {
        self.store.all_records()
    }

    /// Records matching a predicate.
    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>> {
        self.store.find_records(predicate)
    }

    /// The first record matching a predicate.
    pub fn find_one(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>> {
        self.store.find_one_record(predicate)
    }

    pub fn count(&self) -> Result<usize> {
        self.store.count::<M>()
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed record repository.
    fn records<M: Record>(&self) -> RecordRepository<'_, Self, M> {
        RecordRepository::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
