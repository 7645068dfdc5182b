use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::StorageError;

/// A record with a store-assigned integer id.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in error keys and logs (e.g., "assessment").
    const KIND: &'static str;

    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);
}

/// Kinds of store operation, each with its own simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Query,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn delay(&self) -> Duration {
        let ms = match self {
            Operation::GetAll => 300,
            Operation::GetById => 200,
            Operation::Query => 250,
            Operation::Create => 400,
            Operation::Update => 350,
            Operation::Delete => 300,
        };
        Duration::from_millis(ms)
    }
}

/// Whether store operations pause as if they went over the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    #[default]
    None,
    Simulated,
}

impl Latency {
    pub fn from_flag(simulate: bool) -> Self {
        if simulate {
            Latency::Simulated
        } else {
            Latency::None
        }
    }

    async fn wait(&self, op: Operation) {
        if *self == Latency::Simulated {
            tokio::time::sleep(op.delay()).await;
        }
    }
}

/// An in-memory collection of records behind a cloneable handle.
///
/// Every read returns copies; callers never hold references into the store.
pub struct MemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
    latency: Latency,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            latency: self.latency,
        }
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new(latency: Latency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    pub fn with_records(records: Vec<T>, latency: Latency) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    fn not_found(id: u32) -> StorageError {
        StorageError::NotFound {
            key: format!("{} {id}", T::KIND),
        }
    }

    pub async fn get_all(&self) -> Vec<T> {
        self.latency.wait(Operation::GetAll).await;
        self.records.read().await.clone()
    }

    pub async fn get_by_id(&self, id: u32) -> Result<T, StorageError> {
        self.latency.wait(Operation::GetById).await;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Copies of the records matching `predicate`, in store order.
    pub async fn find<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.latency.wait(Operation::Query).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Insert a record with the next id (highest existing id + 1, or 1).
    pub async fn create(&self, mut record: T) -> Result<T, StorageError> {
        self.latency.wait(Operation::Create).await;
        let mut records = self.records.write().await;
        let max_id = records.iter().map(Record::id).max().unwrap_or(0);
        let id = max_id.checked_add(1).ok_or_else(|| StorageError::SaveFailure {
            what: T::KIND.to_string(),
            reason: "id space exhausted".to_string(),
        })?;
        record.set_id(id);
        records.push(record.clone());
        tracing::info!(kind = T::KIND, id, "record created");
        Ok(record)
    }

    /// Replace a record, keeping its original id.
    pub async fn update(&self, id: u32, mut record: T) -> Result<T, StorageError> {
        self.latency.wait(Operation::Update).await;
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.set_id(id);
        *slot = record.clone();
        tracing::info!(kind = T::KIND, id, "record updated");
        Ok(record)
    }

    /// Remove a record and return it.
    pub async fn delete(&self, id: u32) -> Result<T, StorageError> {
        self.latency.wait(Operation::Delete).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        let removed = records.remove(index);
        tracing::info!(kind = T::KIND, id, "record deleted");
        Ok(removed)
    }

    /// Replace the whole contents of the store.
    pub async fn init(&self, records: Vec<T>) {
        let count = records.len();
        *self.records.write().await = records;
        tracing::debug!(kind = T::KIND, count, "store initialised");
    }

    pub async fn clear(&self) {
        self.records.write().await.clear();
        tracing::debug!(kind = T::KIND, "store cleared");
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Copy of the contents without simulated latency, for snapshots.
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}
