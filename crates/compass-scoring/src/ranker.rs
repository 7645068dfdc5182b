use thiserror::Error;

use compass_core::models::value::{RankedValue, ValueScores};

use crate::error::ScoringError;
use crate::tables::ScoreRange;

/// Number of values kept when no limit is given.
pub const DEFAULT_LIMIT: usize = 7;

/// Turn a score mapping into the top `limit` values, best first.
///
/// Scores are clamped into 0–100 before sorting. Ties keep the order of the
/// mapping. Rank and id are both the 1-based position.
pub fn rank(scores: &ValueScores, limit: usize) -> Vec<RankedValue> {
    let mut clamped: Vec<_> = scores
        .iter()
        .map(|(name, score)| (*name, ScoreRange::PERCENT.clamp(*score)))
        .collect();

    // `sort_by` is stable.
    clamped.sort_by(|a, b| b.1.cmp(&a.1));

    clamped
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, (name, score))| {
            let position = position as u32 + 1;
            RankedValue {
                id: position,
                name,
                description: name.description().to_string(),
                // Clamped into 0–100 above.
                score: score as u8,
                rank: position,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingViolation {
    #[error("{name} score {score} is outside [0, 100]")]
    ScoreOutOfRange { name: String, score: u8 },

    #[error("entry {position} has rank {rank}")]
    RankGap { position: usize, rank: u32 },

    #[error("{name} ({score}) is ranked after a lower score ({previous})")]
    OutOfOrder {
        name: String,
        score: u8,
        previous: u8,
    },
}

/// Check a result list against the ranking invariants.
pub fn validate_ranking(results: &[RankedValue]) -> Vec<RankingViolation> {
    let mut violations = Vec::new();
    let mut previous: Option<u8> = None;

    for (position, value) in results.iter().enumerate() {
        if !ScoreRange::PERCENT.contains(i64::from(value.score)) {
            violations.push(RankingViolation::ScoreOutOfRange {
                name: value.name.to_string(),
                score: value.score,
            });
        }
        if value.rank as usize != position + 1 {
            violations.push(RankingViolation::RankGap {
                position: position + 1,
                rank: value.rank,
            });
        }
        if let Some(prev) = previous
            && value.score > prev
        {
            violations.push(RankingViolation::OutOfOrder {
                name: value.name.to_string(),
                score: value.score,
                previous: prev,
            });
        }
        previous = Some(value.score);
    }

    violations
}

/// Fail with the first ranking violation, if any.
pub fn check_ranking(results: &[RankedValue]) -> Result<(), ScoringError> {
    match validate_ranking(results).into_iter().next() {
        Some(violation) => Err(violation.into()),
        None => Ok(()),
    }
}
