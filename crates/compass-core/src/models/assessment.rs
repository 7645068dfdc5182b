use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use super::value::RankedValue;

/// An assessment as handed to the store, before it has an id and a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAssessment {
    pub framework: String,
    pub answers: Vec<Answer>,
    pub results: Vec<RankedValue>,
    pub completed: bool,
}

/// A persisted assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: u32,
    pub framework: String,
    pub answers: Vec<Answer>,
    pub results: Vec<RankedValue>,
    pub completed: bool,
    pub date: jiff::Timestamp,
}

impl Assessment {
    pub fn from_new(id: u32, date: jiff::Timestamp, new: NewAssessment) -> Self {
        Self {
            id,
            framework: new.framework,
            answers: new.answers,
            results: new.results,
            completed: new.completed,
            date,
        }
    }

    /// The top `n` ranked values, in rank order.
    pub fn top_values(&self, n: usize) -> &[RankedValue] {
        &self.results[..n.min(self.results.len())]
    }
}

/// Condensed view of an assessment for history listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSummary {
    pub id: u32,
    pub framework: String,
    pub date: jiff::Timestamp,
    pub completed: bool,
    pub top_values: Vec<RankedValue>,
    pub question_count: usize,
    pub value_count: usize,
}

impl From<&Assessment> for AssessmentSummary {
    fn from(a: &Assessment) -> Self {
        Self {
            id: a.id,
            framework: a.framework.clone(),
            date: a.date,
            completed: a.completed,
            top_values: a.top_values(3).to_vec(),
            question_count: a.answers.len(),
            value_count: a.results.len(),
        }
    }
}
