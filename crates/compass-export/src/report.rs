use serde::Serialize;

use compass_core::models::assessment::{Assessment, AssessmentSummary};

use crate::error::ExportError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentReport<'a> {
    assessment: &'a Assessment,
    generated_at: jiff::Timestamp,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryExport<'a> {
    assessments: &'a [Assessment],
    exported_at: jiff::Timestamp,
    total_assessments: usize,
}

/// Pretty JSON report for a single assessment.
pub fn assessment_report(
    assessment: &Assessment,
    generated_at: jiff::Timestamp,
) -> Result<String, ExportError> {
    let report = AssessmentReport {
        assessment,
        generated_at,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Pretty JSON export of the whole assessment history.
pub fn history_export(
    assessments: &[Assessment],
    exported_at: jiff::Timestamp,
) -> Result<String, ExportError> {
    let export = HistoryExport {
        assessments,
        exported_at,
        total_assessments: assessments.len(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// History-list view of an assessment: framework, date, top three values and
/// answer/result counts.
pub fn summarize(assessment: &Assessment) -> AssessmentSummary {
    AssessmentSummary::from(assessment)
}
