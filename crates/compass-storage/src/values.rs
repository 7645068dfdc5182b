use compass_core::models::value::ValueRecord;

use crate::error::StorageError;
use crate::store::{Latency, MemoryStore, Record};

const FIXTURE: &str = include_str!("../fixtures/values.json");

/// Number of catalog values returned when no limit is given.
pub const DEFAULT_TOP_LIMIT: usize = 5;

impl Record for ValueRecord {
    const KIND: &'static str = "value";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The bundled value catalog.
pub fn fixtures() -> Result<Vec<ValueRecord>, StorageError> {
    serde_json::from_str(FIXTURE).map_err(|e| StorageError::LoadFailure {
        what: "value fixtures".to_string(),
        reason: e.to_string(),
    })
}

/// Catalog of values with reference scores.
#[derive(Clone)]
pub struct ValueStore {
    records: MemoryStore<ValueRecord>,
}

impl ValueStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            records: MemoryStore::new(latency),
        }
    }

    pub fn seeded(latency: Latency) -> Result<Self, StorageError> {
        Ok(Self {
            records: MemoryStore::with_records(fixtures()?, latency),
        })
    }

    pub fn records(&self) -> &MemoryStore<ValueRecord> {
        &self.records
    }

    /// The highest-scoring catalog values. Ties keep store order.
    pub async fn get_top_values(&self, limit: usize) -> Vec<ValueRecord> {
        let mut values = self.records.find(|_| true).await;
        values.sort_by(|a, b| b.score.cmp(&a.score));
        values.truncate(limit);
        values
    }
}
