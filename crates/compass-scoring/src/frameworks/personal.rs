use crate::Framework;

/// The default framework: life priorities, relationships and personal growth.
pub struct PersonalValues;

impl Framework for PersonalValues {
    fn id(&self) -> &str {
        "personal"
    }

    fn name(&self) -> &str {
        "Personal Values Framework"
    }

    fn description(&self) -> &str {
        "Comprehensive assessment covering life priorities, relationships, and personal growth"
    }

    fn duration(&self) -> &str {
        "10-15 minutes"
    }

    fn question_count(&self) -> usize {
        10
    }
}
