use indexmap::IndexMap;

use compass_core::models::answer::{Answer, AnswerValue};
use compass_core::models::question::{Question, QuestionId};

/// Accumulates one answer per question for a single assessment session.
///
/// Re-answering a question replaces its value and timestamp but keeps the
/// position of the first answer.
#[derive(Debug, Clone, Default)]
pub struct AnswerCollector {
    answers: IndexMap<QuestionId, Answer>,
}

impl AnswerCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert an answer, stamped with the current time.
    pub fn record(&mut self, question_id: QuestionId, value: AnswerValue) {
        let answer = Answer {
            question_id,
            value,
            captured_at: jiff::Timestamp::now(),
        };
        self.answers.insert(question_id, answer);
    }

    /// Interpret a raw JSON answer through the question's type and record it.
    pub fn record_raw(&mut self, question: &Question, raw: serde_json::Value) {
        let value = AnswerValue::interpret(question.kind(), raw);
        if !value.is_recognized() {
            tracing::debug!(
                question_id = question.id,
                kind = %question.kind(),
                "answer does not fit its question type; it will not be scored"
            );
        }
        self.record(question.id, value);
    }

    pub fn get(&self, question_id: QuestionId) -> Option<&Answer> {
        self.answers.get(&question_id)
    }

    /// Answers in first-insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers.into_values().collect()
    }
}
