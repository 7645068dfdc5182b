use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use compass_core::models::value::ValueName;

use crate::error::ScoringError;

/// An inclusive score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

impl ScoreRange {
    /// The range every ranked score is clamped into.
    pub const PERCENT: ScoreRange = ScoreRange { min: 0, max: 100 };

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// Half-open range `[min, max)` the random baseline is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Baseline {
    pub min: i64,
    pub max: i64,
}

impl Baseline {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.gen_range(self.min..self.max)
    }
}

/// An importance-tier label of a category-sort answer and its increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportanceTier {
    pub label: String,
    pub increment: i64,
}

/// Keyword, tier and index tables driving the scorer.
///
/// Every value name always matches its own name; `synonyms` lists extra
/// lower-case substrings that count as a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ScoringTables {
    pub synonyms: IndexMap<ValueName, Vec<String>>,
    /// Per matching value for a single-choice or free-text answer.
    pub choice_increment: i64,
    /// Per matching value for each pairwise choice.
    pub pairwise_increment: i64,
    pub tiers: Vec<ImportanceTier>,
    /// Ratings below this contribute nothing.
    pub rating_threshold: u8,
    pub rating_multiplier: i64,
    /// Rating-scale option index to value name. Entries that do not name a
    /// known value are skipped.
    pub rating_index: Vec<String>,
    pub baseline: Baseline,
}

impl Default for ScoringTables {
    fn default() -> Self {
        let synonyms = [
            (ValueName::Integrity, ["honest", "integrity"]),
            (ValueName::Compassion, ["help", "others"]),
            (ValueName::Achievement, ["achieve", "success"]),
            (ValueName::Independence, ["independent", "freedom"]),
            (ValueName::Balance, ["balance", "family"]),
            (ValueName::Family, ["balance", "family"]),
            (ValueName::Growth, ["growth", "learning"]),
        ]
        .into_iter()
        .map(|(name, words)| (name, words.iter().map(|w| w.to_string()).collect()))
        .collect();

        let tiers = [
            ("Most Important", 30),
            ("Essential", 25),
            ("Very Important", 20),
            ("Moderately Important", 15),
        ]
        .into_iter()
        .map(|(label, increment)| ImportanceTier {
            label: label.to_string(),
            increment,
        })
        .collect();

        // "Health" is not a scored value; its ratings are dropped.
        let rating_index = ["Health", "Balance", "Family", "Growth", "Security", "Creativity"]
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            synonyms,
            choice_increment: 15,
            pairwise_increment: 12,
            tiers,
            rating_threshold: 4,
            rating_multiplier: 3,
            rating_index,
            baseline: Baseline { min: 40, max: 65 },
        }
    }
}

impl ScoringTables {
    /// Parse tables from JSON. Missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let tables: ScoringTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.baseline.min >= self.baseline.max {
            return Err(ScoringError::EmptyBaseline {
                min: self.baseline.min,
                max: self.baseline.max,
            });
        }
        Ok(())
    }

    /// Values whose name or synonyms occur in `text`, in enumeration order.
    pub fn matching_values(&self, text: &str) -> Vec<ValueName> {
        let text = text.to_lowercase();
        ValueName::ALL
            .into_iter()
            .filter(|name| {
                text.contains(&name.as_str().to_lowercase())
                    || self
                        .synonyms
                        .get(name)
                        .is_some_and(|words| words.iter().any(|w| text.contains(&w.to_lowercase())))
            })
            .collect()
    }

    /// Increment for a bucket label, matched case-insensitively.
    pub fn tier_increment(&self, label: &str) -> Option<i64> {
        let label = label.trim();
        self.tiers
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(label))
            .map(|t| t.increment)
    }

    /// The value a rating-scale option index feeds, if any.
    pub fn rating_target(&self, index: usize) -> Option<ValueName> {
        self.rating_index.get(index)?.parse().ok()
    }

    /// Index-table entries that do not name a known value.
    pub fn unknown_rating_targets(&self) -> Vec<&str> {
        self.rating_index
            .iter()
            .filter(|name| name.parse::<ValueName>().is_err())
            .map(String::as_str)
            .collect()
    }
}
