use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("failed to load {what}: {reason}")]
    LoadFailure { what: String, reason: String },

    #[error("failed to save {what}: {reason}")]
    SaveFailure { what: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
