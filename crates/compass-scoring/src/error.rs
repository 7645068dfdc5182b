use thiserror::Error;

use crate::ranker::RankingViolation;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown framework: {0}")]
    UnknownFramework(String),

    #[error("invalid ranking: {0}")]
    Ranking(#[from] RankingViolation),

    #[error("invalid scoring tables: {0}")]
    Tables(#[from] serde_json::Error),

    #[error("baseline range [{min}, {max}) is empty")]
    EmptyBaseline { min: i64, max: i64 },
}
