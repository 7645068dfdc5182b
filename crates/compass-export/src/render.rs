use serde::Serialize;
use tera::{Context, Tera};

use compass_core::models::assessment::Assessment;
use compass_core::models::value::RankedValue;

use crate::error::ExportError;

/// Number of values included in the share text when no limit is given.
pub const DEFAULT_SHARE_LIMIT: usize = 5;

const SHARE_TEMPLATE_NAME: &str = "share.txt";

const SHARE_TEMPLATE: &str = "My top values from Values Compass:
{% for value in values %}{{ value.rank }}. {{ value.name }} ({{ value.score }}/100)
{% endfor %}
Discover your values at Values Compass!";

#[derive(Serialize)]
struct ShareContext<'a> {
    framework: &'a str,
    values: &'a [RankedValue],
}

/// Render the share text listing the top `limit` values of an assessment.
pub fn share_text(assessment: &Assessment, limit: usize) -> Result<String, ExportError> {
    if assessment.results.is_empty() {
        return Err(ExportError::NoResults(assessment.id));
    }
    render_share(SHARE_TEMPLATE, assessment, limit)
}

/// Render a custom share template. The context holds `framework` and
/// `values` (the top `limit` ranked values).
pub fn render_share(
    template_content: &str,
    assessment: &Assessment,
    limit: usize,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(SHARE_TEMPLATE_NAME, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ShareContext {
        framework: &assessment.framework,
        values: assessment.top_values(limit),
    })?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(SHARE_TEMPLATE_NAME, &context)?;
    tracing::debug!(assessment_id = assessment.id, limit, "share text rendered");
    Ok(rendered)
}
