//! A single questionnaire session, from loading the questions to saving the
//! scored assessment.

use compass_core::models::assessment::{Assessment, NewAssessment};
use compass_core::models::question::{Question, QuestionId};
use compass_scoring::collector::AnswerCollector;
use compass_scoring::ranker;
use compass_scoring::scorer::Scorer;
use compass_scoring::Framework;
use compass_storage::assessments::AssessmentStore;
use compass_storage::error::StorageError;
use compass_storage::questions::QuestionStore;

use crate::error::FlowError;

/// Where the session stands after moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Now on the question at this 0-based position.
    Question(usize),
    /// Already on the last question; the session can be completed.
    Finished,
}

pub struct AssessmentFlow {
    framework: Box<dyn Framework>,
    questions: Vec<Question>,
    position: usize,
    collector: AnswerCollector,
}

impl AssessmentFlow {
    /// Load the questions and position the session on the first one.
    pub async fn start(
        store: &QuestionStore,
        framework: Box<dyn Framework>,
    ) -> Result<Self, FlowError> {
        let questions = store.fetch_all().await.map_err(|e| match e {
            StorageError::NotFound { .. } => FlowError::NoQuestions,
            other => FlowError::LoadFailure(other),
        })?;
        tracing::info!(
            framework = framework.id(),
            questions = questions.len(),
            "assessment started"
        );
        Self::with_questions(framework, questions)
    }

    pub fn with_questions(
        framework: Box<dyn Framework>,
        questions: Vec<Question>,
    ) -> Result<Self, FlowError> {
        if questions.is_empty() {
            return Err(FlowError::NoQuestions);
        }
        Ok(Self {
            framework,
            questions,
            position: 0,
            collector: AnswerCollector::new(),
        })
    }

    pub fn framework(&self) -> &dyn Framework {
        self.framework.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.position]
    }

    /// 0-based position of the current question.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.questions.len()
    }

    /// Percentage of the questionnaire reached, counting the current
    /// question.
    pub fn progress(&self) -> f64 {
        (self.position + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn answers(&self) -> &AnswerCollector {
        &self.collector
    }

    /// Answer the current question.
    pub fn answer(&mut self, raw: serde_json::Value) {
        let question = &self.questions[self.position];
        self.collector.record_raw(question, raw);
    }

    /// Answer any question of this session by id.
    pub fn answer_question(
        &mut self,
        question_id: QuestionId,
        raw: serde_json::Value,
    ) -> Result<(), FlowError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(FlowError::NotFound(question_id))?;
        self.collector.record_raw(question, raw);
        Ok(())
    }

    pub fn next(&mut self) -> Step {
        if self.is_last() {
            Step::Finished
        } else {
            self.position += 1;
            Step::Question(self.position)
        }
    }

    /// Move forward without answering the current question.
    pub fn skip(&mut self) -> Step {
        tracing::debug!(question_id = self.current().id, "question skipped");
        self.next()
    }

    /// Move back one question. Returns `false` on the first question.
    pub fn previous(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Score and rank the answers, then save the completed assessment.
    ///
    /// Nothing is saved when the ranked results break a ranking invariant.
    pub async fn complete(
        self,
        store: &AssessmentStore,
        scorer: &Scorer,
        limit: usize,
    ) -> Result<Assessment, FlowError> {
        let scores = scorer.score(self.collector.all());
        let results = ranker::rank(&scores, limit);
        ranker::check_ranking(&results)?;
        tracing::debug!(answers = self.collector.len(), ranked = results.len(), "assessment scored");

        let new = NewAssessment {
            framework: self.framework.name().to_string(),
            answers: self.collector.into_answers(),
            results,
            completed: true,
        };
        let saved = store.create(new).await.map_err(FlowError::SaveFailure)?;
        tracing::info!(id = saved.id, framework = %saved.framework, "assessment completed");
        Ok(saved)
    }
}
