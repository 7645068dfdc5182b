use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Description used for names that have no entry of their own.
pub const GENERIC_DESCRIPTION: &str = "A core personal value that guides your decisions";

/// The closed set of personal values an assessment scores.
///
/// Declaration order is the enumeration order used to break ranking ties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum ValueName {
    Growth,
    Integrity,
    Balance,
    Family,
    Independence,
    Compassion,
    Achievement,
    Security,
    Creativity,
    Justice,
}

impl ValueName {
    pub const ALL: [ValueName; 10] = [
        ValueName::Growth,
        ValueName::Integrity,
        ValueName::Balance,
        ValueName::Family,
        ValueName::Independence,
        ValueName::Compassion,
        ValueName::Achievement,
        ValueName::Security,
        ValueName::Creativity,
        ValueName::Justice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueName::Growth => "Growth",
            ValueName::Integrity => "Integrity",
            ValueName::Balance => "Balance",
            ValueName::Family => "Family",
            ValueName::Independence => "Independence",
            ValueName::Compassion => "Compassion",
            ValueName::Achievement => "Achievement",
            ValueName::Security => "Security",
            ValueName::Creativity => "Creativity",
            ValueName::Justice => "Justice",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ValueName::Growth => {
                "Continuous learning, personal development, and expanding your capabilities"
            }
            ValueName::Integrity => {
                "Acting with honesty, authenticity, and strong moral principles"
            }
            ValueName::Balance => "Maintaining harmony between different areas of life",
            ValueName::Family => "Strong, loving relationships with family members",
            ValueName::Independence => {
                "Freedom to make your own choices and live authentically"
            }
            ValueName::Compassion => {
                "Care and concern for others' wellbeing and showing empathy"
            }
            ValueName::Achievement => {
                "Setting and reaching meaningful goals and accomplishments"
            }
            ValueName::Security => "Stability, safety, and a predictable foundation for life",
            ValueName::Creativity => "Imagination, originality, and bringing new ideas to life",
            ValueName::Justice => "Fairness, equality, and standing up for what is right",
        }
    }
}

/// Look up the description for a value by its display name, falling back to
/// [`GENERIC_DESCRIPTION`] for names outside the known set.
pub fn describe(name: &str) -> &'static str {
    name.parse::<ValueName>()
        .map(|v| v.description())
        .unwrap_or(GENERIC_DESCRIPTION)
}

impl fmt::Display for ValueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueName {
    type Err = CoreError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ValueName::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownValue(s.to_string()))
    }
}

/// Accumulated score per value, in [`ValueName::ALL`] order.
pub type ValueScores = IndexMap<ValueName, i64>;

/// A score mapping with every known value set to zero.
pub fn zeroed_scores() -> ValueScores {
    ValueName::ALL.into_iter().map(|v| (v, 0)).collect()
}

/// One entry of a ranked result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedValue {
    pub id: u32,
    pub name: ValueName,
    pub description: String,
    /// Always within 0–100.
    pub score: u8,
    /// 1-based, no gaps.
    pub rank: u32,
}

/// An entry of the value catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub score: u8,
}
