use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown value name: {0}")]
    UnknownValue(String),

    #[error("unknown question type: {0}")]
    UnknownQuestionType(String),
}
