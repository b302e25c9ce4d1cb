//! In-memory record store
//!
//! Same contract as the SQL store. Storage order is insertion order.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::records::Record;

use super::errors::{StoreError, StoreOperation, StoreResult};
use super::RecordStore;

/// Record store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<Record>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, read through a poisoned lock if need be
    pub fn len(&self) -> usize {
        match self.records.read() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(operation: StoreOperation) -> StoreError {
    StoreError::query(operation, "lock poisoned")
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        let records = self
            .records
            .read()
            .map_err(|_| poisoned(StoreOperation::GetOne))?;

        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> StoreResult<Vec<Record>> {
        let records = self
            .records
            .read()
            .map_err(|_| poisoned(StoreOperation::GetAll))?;

        Ok(records.clone())
    }

    async fn upsert(&self, record: &Record) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| poisoned(StoreOperation::Save))?;

        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                existing.first_name = record.first_name.clone();
                existing.last_name = record.last_name.clone();
                existing.phone_number = record.phone_number.clone();
            }
            None => records.push(record.clone()),
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|_| poisoned(StoreOperation::Delete))?;

        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}
