//! Boundary contracts for the surrounding application's persistence.
//!
//! The engine itself never performs I/O; these traits and payload types are
//! the request/response shapes a shell uses to persist a finalized coverage
//! status and to keep its unrelated compliance records. Implementations live
//! outside the crate; [`memory::MemoryStore`] exists for tests and demos.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::flow::{AnswerMap, FlagMap};

/// The engine's terminal output in persistable form: the covered/exempt
/// classification plus the answers and flags that justify it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusRecord {
    pub covered: bool,
    /// The exemption category, when one applies (e.g. "qualified_exemption").
    pub exemption_type: Option<String>,
    pub answers: AnswerMap,
    pub flags: FlagMap,
}

impl StatusRecord {
    /// Builds the payload for a reached result key.
    ///
    /// Coverage is a property of the key alone: only the covered key counts
    /// as covered, and the two exemption keys carry their key as the
    /// exemption type.
    pub fn from_result_key(result_key: &str, answers: AnswerMap, flags: FlagMap) -> Self {
        let covered = result_key == "covered";
        let exemption_type = matches!(result_key, "qualified_exemption" | "processing_exemption")
            .then(|| result_key.to_string());
        Self {
            covered,
            exemption_type,
            answers,
            flags,
        }
    }
}

/// A stored compliance record, unrelated to the flow engine itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordItem {
    pub id: u64,
    pub kind: String,
    pub title: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Creation payload for a [`RecordItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub kind: String,
    pub title: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Fetch/persist contract for the finalized coverage status.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// The current status, or `None` when coverage was never determined.
    async fn fetch_status(&self) -> Result<Option<StatusRecord>, StoreError>;

    /// Persists a finalized status, replacing any prior one.
    async fn save_status(&self, status: StatusRecord) -> Result<StatusRecord, StoreError>;
}

/// CRUD contract for arbitrary typed compliance records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Lists records, optionally filtered by kind, newest first.
    async fn list_records(&self, kind: Option<&str>) -> Result<Vec<RecordItem>, StoreError>;

    async fn create_record(&self, record: NewRecord) -> Result<RecordItem, StoreError>;

    async fn delete_record(&self, id: u64) -> Result<(), StoreError>;
}
