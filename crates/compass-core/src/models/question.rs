use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub type QuestionId = u32;

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub body: QuestionBody,
}

impl Question {
    pub fn kind(&self) -> QuestionType {
        self.body.kind()
    }
}

/// Type-specific option data for a question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionBody {
    SingleChoice {
        options: Vec<String>,
    },
    MultipleChoice {
        options: Vec<String>,
    },
    /// Options are the labels of the slider stops; the answer is the stop index.
    Slider {
        options: Vec<String>,
    },
    /// Options in their initial order; the answer is the reordered list.
    Ranking {
        options: Vec<String>,
    },
    /// One 1–5 rating per option; the answer maps option index to rating.
    RatingScale {
        options: Vec<String>,
    },
    /// Items sorted into importance-tier buckets.
    CategorySort {
        buckets: Vec<String>,
        items: Vec<String>,
    },
    /// Forced choice between two labels, per pair.
    Pairwise {
        pairs: Vec<(String, String)>,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionType {
        match self {
            QuestionBody::SingleChoice { .. } => QuestionType::SingleChoice,
            QuestionBody::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionBody::Slider { .. } => QuestionType::Slider,
            QuestionBody::Ranking { .. } => QuestionType::Ranking,
            QuestionBody::RatingScale { .. } => QuestionType::RatingScale,
            QuestionBody::CategorySort { .. } => QuestionType::CategorySort,
            QuestionBody::Pairwise { .. } => QuestionType::Pairwise,
            QuestionBody::Text { .. } => QuestionType::Text,
        }
    }
}

/// The type tag of a question, without its option data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    Slider,
    Ranking,
    RatingScale,
    CategorySort,
    Pairwise,
    Text,
}

impl QuestionType {
    pub const ALL: [QuestionType; 8] = [
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::Slider,
        QuestionType::Ranking,
        QuestionType::RatingScale,
        QuestionType::CategorySort,
        QuestionType::Pairwise,
        QuestionType::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single-choice",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::Slider => "slider",
            QuestionType::Ranking => "ranking",
            QuestionType::RatingScale => "rating-scale",
            QuestionType::CategorySort => "category-sort",
            QuestionType::Pairwise => "pairwise",
            QuestionType::Text => "text",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownQuestionType(s.to_string()))
    }
}
