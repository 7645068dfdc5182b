use compass_core::models::assessment::{Assessment, NewAssessment};

use crate::error::StorageError;
use crate::store::{Latency, MemoryStore, Record};

const FIXTURE: &str = include_str!("../fixtures/assessments.json");

/// Number of assessments returned by [`AssessmentStore::get_recent`] when no
/// limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

impl Record for Assessment {
    const KIND: &'static str = "assessment";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The bundled assessment history.
pub fn fixtures() -> Result<Vec<Assessment>, StorageError> {
    serde_json::from_str(FIXTURE).map_err(|e| StorageError::LoadFailure {
        what: "assessment fixtures".to_string(),
        reason: e.to_string(),
    })
}

/// Completed and in-progress assessments.
#[derive(Clone)]
pub struct AssessmentStore {
    records: MemoryStore<Assessment>,
}

impl AssessmentStore {
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

    pub fn records(&self) -> &MemoryStore<Assessment> {
        &self.records
    }

    /// Persist a new assessment, assigning its id and date.
    pub async fn create(&self, new: NewAssessment) -> Result<Assessment, StorageError> {
        // The id is a placeholder; the store assigns the real one.
        let assessment = Assessment::from_new(0, jiff::Timestamp::now(), new);
        self.records.create(assessment).await
    }

    pub async fn get_all(&self) -> Vec<Assessment> {
        self.records.get_all().await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Assessment, StorageError> {
        self.records.get_by_id(id).await
    }

    pub async fn update(&self, id: u32, assessment: Assessment) -> Result<Assessment, StorageError> {
        self.records.update(id, assessment).await
    }

    pub async fn delete(&self, id: u32) -> Result<Assessment, StorageError> {
        self.records.delete(id).await
    }

    /// The newest assessments first.
    pub async fn get_recent(&self, limit: usize) -> Vec<Assessment> {
        let mut assessments = self.records.find(|_| true).await;
        assessments.sort_by(|a, b| b.date.cmp(&a.date));
        assessments.truncate(limit);
        assessments
    }

    /// The most recent assessment, if any.
    pub async fn latest(&self) -> Option<Assessment> {
        self.get_recent(1).await.into_iter().next()
    }

    pub async fn completed(&self) -> Vec<Assessment> {
        self.records.find(|a| a.completed).await
    }

    pub async fn in_progress(&self) -> Vec<Assessment> {
        self.records.find(|a| !a.completed).await
    }
}
