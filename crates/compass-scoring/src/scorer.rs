use rand::Rng;

use compass_core::models::answer::{Answer, AnswerValue};
use compass_core::models::value::{zeroed_scores, ValueName, ValueScores};

use crate::tables::ScoringTables;

/// Maps collected answers to a score per value name.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tables: ScoringTables,
}

impl Scorer {
    pub fn new(tables: ScoringTables) -> Self {
        for name in tables.unknown_rating_targets() {
            tracing::warn!(name, "rating index names an unknown value; its ratings are ignored");
        }
        Self { tables }
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Score answers with a baseline drawn from the thread RNG.
    ///
    /// Not deterministic: scoring the same answers twice generally yields
    /// different scores. The result is not clamped.
    pub fn score<'a>(&self, answers: impl IntoIterator<Item = &'a Answer>) -> ValueScores {
        self.score_with_rng(answers, &mut rand::thread_rng())
    }

    pub fn score_with_rng<'a, R: Rng + ?Sized>(
        &self,
        answers: impl IntoIterator<Item = &'a Answer>,
        rng: &mut R,
    ) -> ValueScores {
        let mut scores = self.keyword_scores(answers);
        for score in scores.values_mut() {
            *score += self.tables.baseline.sample(rng);
        }
        scores
    }

    /// The deterministic part of scoring: every contribution except the
    /// random baseline.
    pub fn keyword_scores<'a>(&self, answers: impl IntoIterator<Item = &'a Answer>) -> ValueScores {
        let mut scores = zeroed_scores();
        let mut counted = 0usize;
        for answer in answers {
            counted += 1;
            self.apply(&mut scores, &answer.value);
        }
        tracing::debug!(answers = counted, ?scores, "keyword scores computed");
        scores
    }

    fn apply(&self, scores: &mut ValueScores, value: &AnswerValue) {
        let tables = &self.tables;
        match value {
            AnswerValue::Choice(text) => {
                self.add_matches(scores, text, tables.choice_increment);
            }
            AnswerValue::Buckets(buckets) => {
                for (label, items) in buckets {
                    let Some(increment) = tables.tier_increment(label) else {
                        continue;
                    };
                    for item in items {
                        self.add_matches(scores, item, increment);
                    }
                }
            }
            AnswerValue::Pairwise(choices) => {
                for chosen in choices.values() {
                    self.add_matches(scores, chosen, tables.pairwise_increment);
                }
            }
            AnswerValue::Ratings(ratings) => {
                for (&index, &rating) in ratings {
                    if rating < tables.rating_threshold {
                        continue;
                    }
                    if let Some(name) = tables.rating_target(index) {
                        add(scores, name, i64::from(rating) * tables.rating_multiplier);
                    }
                }
            }
            AnswerValue::Choices(_) | AnswerValue::Numeric(_) | AnswerValue::Unrecognized(_) => {}
        }
    }

    fn add_matches(&self, scores: &mut ValueScores, text: &str, increment: i64) {
        for name in self.tables.matching_values(text) {
            add(scores, name, increment);
        }
    }
}

fn add(scores: &mut ValueScores, name: ValueName, points: i64) {
    if let Some(score) = scores.get_mut(&name) {
        *score += points;
    }
}
