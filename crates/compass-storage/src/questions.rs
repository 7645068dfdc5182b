use compass_core::models::question::Question;

use crate::error::StorageError;
use crate::store::{Latency, MemoryStore, Record};

const FIXTURE: &str = include_str!("../fixtures/questions.json");

impl Record for Question {
    const KIND: &'static str = "question";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// The bundled question set.
pub fn fixtures() -> Result<Vec<Question>, StorageError> {
    serde_json::from_str(FIXTURE).map_err(|e| StorageError::LoadFailure {
        what: "question fixtures".to_string(),
        reason: e.to_string(),
    })
}

/// Question definitions for the assessment flow.
#[derive(Clone)]
pub struct QuestionStore {
    records: MemoryStore<Question>,
}

impl QuestionStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            records: MemoryStore::new(latency),
        }
    }

    /// A store holding the bundled question set.
    pub fn seeded(latency: Latency) -> Result<Self, StorageError> {
        Ok(Self {
            records: MemoryStore::with_records(fixtures()?, latency),
        })
    }

    pub fn records(&self) -> &MemoryStore<Question> {
        &self.records
    }

    /// Every question, in store order. Fails with `NotFound` when there are
    /// none.
    pub async fn fetch_all(&self) -> Result<Vec<Question>, StorageError> {
        let questions = self.records.get_all().await;
        if questions.is_empty() {
            return Err(StorageError::NotFound {
                key: "questions".to_string(),
            });
        }
        tracing::debug!(count = questions.len(), "questions loaded");
        Ok(questions)
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Question, StorageError> {
        self.records.get_by_id(id).await
    }

    pub async fn get_by_category(&self, category: &str) -> Vec<Question> {
        self.records
            .find(|q| q.category.as_deref() == Some(category))
            .await
    }
}
