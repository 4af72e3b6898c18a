//! RecordStore - Abstract read-mostly storage for catalog records.

use super::Record;
use crate::error::Result;

/// Abstract storage for records.
///
/// Methods that would read ambiguously on a multi-collection store carry a
/// `_record`/`_records` suffix. The `RecordRepository` wrapper provides clean
/// short names for all methods.
pub trait RecordStore: Send + Sync {
    /// Get a record by ID. Returns None if not found.
    fn get_record<M: Record>(&self, id: &str) -> Result<Option<M>>;

    /// Insert a new record at the end of its collection. Fails if the ID is taken.
    fn insert<M: Record>(&self, record: &M) -> Result<()>;

    /// Insert or replace a record. A replaced record keeps its position.
    fn upsert<M: Record>(&self, record: &M) -> Result<()>;

    /// All records of a collection, in insertion order.
    fn all_records<M: Record>(&self) -> Result<Vec<M>>;

    /// Records matching a predicate, in insertion order.
    fn find_records<M: Record>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>>;

    /// The first record (in insertion order) matching a predicate.
    fn find_one_record<M: Record>(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Option<M>>;

    /// Number of records in a collection.
    fn count<M: Record>(&self) -> Result<usize>;
}
