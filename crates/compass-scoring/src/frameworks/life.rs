use crate::Framework;

/// Legacy, purpose and meaning. Keeps every value in its results.
pub struct LifeValues;

impl Framework for LifeValues {
    fn id(&self) -> &str {
        "life"
    }

    fn name(&self) -> &str {
        "Life Values Compass"
    }

    fn description(&self) -> &str {
        "Deep dive into legacy, purpose, and what gives your life meaning"
    }

    fn duration(&self) -> &str {
        "12-18 minutes"
    }

    fn question_count(&self) -> usize {
        12
    }

    fn result_limit(&self) -> usize {
        compass_core::models::value::ValueName::ALL.len()
    }
}
