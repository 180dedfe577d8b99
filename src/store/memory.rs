use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;

use super::{NewRecord, RecordItem, RecordStore, StatusRecord, StatusStore};

/// In-memory store for tests and demos. Single-user, like the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    status: Mutex<Option<StatusRecord>>,
    records: Mutex<Vec<RecordItem>>,
    next_id: Mutex<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> Result<u64, StoreError> {
        let mut next_id = self
            .next_id
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        *next_id += 1;
        Ok(*next_id)
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn fetch_status(&self) -> Result<Option<StatusRecord>, StoreError> {
        let status = self
            .status
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(status.clone())
    }

    async fn save_status(&self, status: StatusRecord) -> Result<StatusRecord, StoreError> {
        let mut slot = self
            .status
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        *slot = Some(status.clone());
        Ok(status)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_records(&self, kind: Option<&str>) -> Result<Vec<RecordItem>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let mut listed: Vec<RecordItem> = records
            .iter()
            .filter(|record| kind.is_none_or(|k| record.kind == k))
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(listed)
    }

    async fn create_record(&self, record: NewRecord) -> Result<RecordItem, StoreError> {
        let created = RecordItem {
            id: self.allocate_id()?,
            kind: record.kind,
            title: record.title,
            date: record.date,
            notes: record.notes,
        };
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        records.push(created.clone());
        Ok(created)
    }

    async fn delete_record(&self, id: u64) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
