use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use compass_core::models::assessment::{Assessment, AssessmentSummary};
use compass_core::models::question::{Question, QuestionId};
use compass_core::models::value::ValueRecord;
use compass_export::{filenames, render, report};
use compass_scoring::FrameworkInfo;

use crate::error::AppError;
use crate::flow::{AssessmentFlow, Step};
use crate::state::AppState;

/// Raw answers keyed by question id, as read from an answers file.
pub type RawAnswers = BTreeMap<QuestionId, serde_json::Value>;

/// Assessment history split the way the history view shows it.
#[derive(Debug, Clone, Serialize)]
pub struct History {
    pub completed: Vec<AssessmentSummary>,
    pub in_progress: Vec<AssessmentSummary>,
}

pub fn list_frameworks() -> Vec<FrameworkInfo> {
    compass_scoring::all_frameworks()
        .iter()
        .map(|f| f.info())
        .collect()
}

pub async fn list_questions(
    state: &AppState,
    category: Option<&str>,
) -> Result<Vec<Question>, AppError> {
    match category {
        Some(category) => Ok(state.questions.get_by_category(category).await),
        None => Ok(state.questions.fetch_all().await?),
    }
}

/// Walk the questionnaire in order, answering every question present in
/// `answers` and skipping the rest, then save the scored assessment.
pub async fn run_assessment(
    state: &AppState,
    framework_id: &str,
    answers: &RawAnswers,
) -> Result<Assessment, AppError> {
    let framework = compass_scoring::require_framework(framework_id)?;
    let scorer = state.scorer_for(framework.as_ref());
    let limit = state.result_limit_for(framework.as_ref());

    let mut flow = AssessmentFlow::start(&state.questions, framework).await?;

    let unknown: Vec<_> = answers
        .keys()
        .filter(|id| !flow.questions().iter().any(|q| q.id == **id))
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(?unknown, "answers for unknown questions ignored");
    }

    loop {
        let step = match answers.get(&flow.current().id) {
            Some(raw) => {
                flow.answer(raw.clone());
                flow.next()
            }
            None => flow.skip(),
        };
        if step == Step::Finished {
            break;
        }
    }

    let assessment = flow.complete(&state.assessments, &scorer, limit).await?;
    state.persist().await?;
    Ok(assessment)
}

pub async fn latest_results(state: &AppState) -> Result<Assessment, AppError> {
    state
        .assessments
        .latest()
        .await
        .ok_or_else(|| AppError::NotFound("assessment".to_string()))
}

pub async fn share_latest(state: &AppState) -> Result<String, AppError> {
    let latest = latest_results(state).await?;
    Ok(render::share_text(&latest, state.config.share_limit)?)
}

pub async fn history(state: &AppState) -> History {
    let summarize = |assessments: Vec<Assessment>| -> Vec<AssessmentSummary> {
        assessments.iter().map(report::summarize).collect()
    };
    History {
        completed: summarize(state.assessments.completed().await),
        in_progress: summarize(state.assessments.in_progress().await),
    }
}

/// Summaries of the newest assessments, newest first.
pub async fn recent(state: &AppState, limit: usize) -> Vec<AssessmentSummary> {
    state
        .assessments
        .get_recent(limit)
        .await
        .iter()
        .map(report::summarize)
        .collect()
}

pub async fn delete_assessment(state: &AppState, id: u32) -> Result<Assessment, AppError> {
    let deleted = state.assessments.delete(id).await?;
    state.persist().await?;
    Ok(deleted)
}

pub async fn top_values(state: &AppState, limit: usize) -> Vec<ValueRecord> {
    state.values.get_top_values(limit).await
}

/// Write the latest assessment's report into `dir`. Returns the file path.
pub async fn export_latest_report(state: &AppState, dir: &Path) -> Result<PathBuf, AppError> {
    let latest = latest_results(state).await?;
    let now = jiff::Timestamp::now();
    let body = report::assessment_report(&latest, now)?;
    write_export(dir, &filenames::assessment_report(now), &body).await
}

/// Write the full history export into `dir`. Returns the file path.
pub async fn export_history(state: &AppState, dir: &Path) -> Result<PathBuf, AppError> {
    let assessments = state.assessments.get_all().await;
    let now = jiff::Timestamp::now();
    let body = report::history_export(&assessments, now)?;
    write_export(dir, &filenames::history_export(now), &body).await
}

async fn write_export(dir: &Path, filename: &str, body: &str) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, body).await?;
    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}
