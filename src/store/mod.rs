//! # Record Store
//!
//! Owns the persisted representation of records.
//!
//! Two implementations of [`RecordStore`] exist:
//! - [`SqlRecordStore`] talks to MySQL or PostgreSQL through a sqlx pool
//! - [`InMemoryRecordStore`] keeps records in process memory
//!
//! Every operation is a single statement. `upsert` is an atomic
//! insert-or-update keyed on id, so concurrent writers to the same id
//! resolve as last-writer-wins inside the database.

mod engine;
mod errors;
mod memory;
mod sql;

pub use engine::{ConnectionDescriptor, DbEngine};
pub use errors::{StoreError, StoreOperation, StoreResult};
pub use memory::InMemoryRecordStore;
pub use sql::{PoolSettings, SqlRecordStore};

use async_trait::async_trait;

use crate::records::Record;

/// Single-record persistence over the `records` table
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Look up one record. `Ok(None)` when no row has this id.
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>>;

    /// Every record, in storage order. Empty table yields an empty vec.
    async fn get_all(&self) -> StoreResult<Vec<Record>>;

    /// Insert the record, or overwrite the data fields of the row with the same id.
    async fn upsert(&self, record: &Record) -> StoreResult<()>;

    /// Remove the row with this id.
    ///
    /// Returns whether a row was removed; deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}
