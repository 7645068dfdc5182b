//! compass-scoring
//!
//! The assessment pipeline: collect answers, score them against the value
//! names, rank the scores. Pure computation, no I/O.

pub mod collector;
pub mod error;
pub mod frameworks;
pub mod ranker;
pub mod scorer;
pub mod tables;

use compass_core::models::value::RankedValue;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tables::ScoringTables;

/// Trait implemented by each assessment framework.
pub trait Framework: Send + Sync {
    /// Unique identifier (e.g., "personal", "career").
    fn id(&self) -> &str;

    /// Human-readable name recorded on the assessment.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Expected time to complete (e.g., "10-15 minutes").
    fn duration(&self) -> &str;

    /// Number of questions the framework is built around.
    fn question_count(&self) -> usize;

    /// Scoring tables used for this framework's answers.
    fn tables(&self) -> ScoringTables {
        ScoringTables::default()
    }

    /// How many ranked values an assessment keeps.
    fn result_limit(&self) -> usize {
        ranker::DEFAULT_LIMIT
    }

    /// Format ranked results as a Markdown list.
    fn describe_results(&self, results: &[RankedValue]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for value in results {
            output.push_str(&format!(
                "{}. {} ({}/100) - {}\n",
                value.rank, value.name, value.score, value.description
            ));
        }
        output
    }

    fn info(&self) -> FrameworkInfo {
        FrameworkInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            duration: self.duration().to_string(),
            question_count: self.question_count(),
        }
    }
}

/// Serializable framework metadata for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FrameworkInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub question_count: usize,
}

/// Return all registered frameworks.
pub fn all_frameworks() -> Vec<Box<dyn Framework>> {
    vec![
        Box::new(frameworks::personal::PersonalValues),
        Box::new(frameworks::career::CareerValues),
        Box::new(frameworks::life::LifeValues),
    ]
}

/// Look up a framework by ID.
pub fn get_framework(id: &str) -> Option<Box<dyn Framework>> {
    all_frameworks().into_iter().find(|f| f.id() == id)
}

/// Look up a framework by ID, failing for unknown IDs.
pub fn require_framework(id: &str) -> Result<Box<dyn Framework>, error::ScoringError> {
    get_framework(id).ok_or_else(|| error::ScoringError::UnknownFramework(id.to_string()))
}
