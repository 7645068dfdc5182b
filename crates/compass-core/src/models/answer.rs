use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::question::{QuestionId, QuestionType};

/// One recorded answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
    pub captured_at: jiff::Timestamp,
}

/// The shape of an answer, decided when it is recorded from the type of the
/// question it answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    /// A single selected option or free text.
    Choice(String),
    /// Several selected options, or a full ordering of them.
    Choices(Vec<String>),
    /// A slider position.
    Numeric(f64),
    /// Importance-tier label to the items sorted into it.
    Buckets(IndexMap<String, Vec<String>>),
    /// Pair key to the label chosen for that pair.
    Pairwise(IndexMap<String, String>),
    /// Option index to a 1–5 rating.
    Ratings(BTreeMap<usize, u8>),
    /// A raw value that did not fit its question's type.
    Unrecognized(Value),
}

impl AnswerValue {
    /// Interpret a raw JSON answer through the type of its question.
    ///
    /// Never fails: a shape the question type does not produce is kept as
    /// [`AnswerValue::Unrecognized`].
    pub fn interpret(kind: QuestionType, raw: Value) -> AnswerValue {
        let parsed = match kind {
            QuestionType::SingleChoice | QuestionType::Text => match &raw {
                Value::String(s) => Some(AnswerValue::Choice(s.clone())),
                _ => None,
            },
            QuestionType::MultipleChoice | QuestionType::Ranking => {
                string_list(&raw).map(AnswerValue::Choices)
            }
            QuestionType::Slider => raw.as_f64().map(AnswerValue::Numeric),
            QuestionType::CategorySort => buckets(&raw).map(AnswerValue::Buckets),
            QuestionType::Pairwise => pairwise(&raw).map(AnswerValue::Pairwise),
            QuestionType::RatingScale => ratings(&raw).map(AnswerValue::Ratings),
        };
        parsed.unwrap_or(AnswerValue::Unrecognized(raw))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AnswerValue::Unrecognized(_))
    }
}

fn string_list(raw: &Value) -> Option<Vec<String>> {
    raw.as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

fn buckets(raw: &Value) -> Option<IndexMap<String, Vec<String>>> {
    raw.as_object()?
        .iter()
        .map(|(label, items)| Some((label.clone(), string_list(items)?)))
        .collect()
}

fn pairwise(raw: &Value) -> Option<IndexMap<String, String>> {
    raw.as_object()?
        .iter()
        .map(|(pair, choice)| Some((pair.clone(), choice.as_str()?.to_string())))
        .collect()
}

/// Malformed entries are dropped; the answer is unrecognized only when
/// entries were given and none of them is a rating.
fn ratings(raw: &Value) -> Option<BTreeMap<usize, u8>> {
    let (given, ratings): (usize, BTreeMap<usize, u8>) = match raw {
        Value::Object(map) => (
            map.len(),
            map.iter()
                .filter_map(|(index, rating)| Some((index.parse().ok()?, rating_value(rating)?)))
                .collect(),
        ),
        // Unrated positions in array form are null.
        Value::Array(items) => {
            let rated: Vec<_> = items
                .iter()
                .enumerate()
                .filter(|(_, rating)| !rating.is_null())
                .collect();
            (
                rated.len(),
                rated
                    .into_iter()
                    .filter_map(|(index, rating)| Some((index, rating_value(rating)?)))
                    .collect(),
            )
        }
        _ => return None,
    };
    if given > 0 && ratings.is_empty() {
        return None;
    }
    Some(ratings)
}

/// A whole number in `0..=255`, written as an integer or as a float such as
/// `5.0`.
fn rating_value(raw: &Value) -> Option<u8> {
    if let Some(r) = raw.as_u64() {
        return u8::try_from(r).ok();
    }
    let r = raw.as_f64()?;
    if r.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&r) {
        Some(r as u8)
    } else {
        None
    }
}
