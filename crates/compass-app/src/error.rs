use thiserror::Error;

use compass_core::models::question::QuestionId;
use compass_export::error::ExportError;
use compass_scoring::error::ScoringError;
use compass_storage::error::StorageError;

/// Failures of an assessment session.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("no questions available for this assessment")]
    NoQuestions,

    #[error("question {0} is not part of this assessment")]
    NotFound(QuestionId),

    #[error("failed to load questions: {0}")]
    LoadFailure(#[source] StorageError),

    #[error("failed to save assessment: {0}")]
    SaveFailure(#[source] StorageError),

    #[error("assessment results are not a valid ranking: {0}")]
    InvalidRanking(#[from] ScoringError),
}

/// Unified error type for all application commands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => AppError::NotFound(key),
            other => AppError::Storage(other),
        }
    }
}
