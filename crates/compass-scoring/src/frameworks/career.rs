use compass_core::models::value::ValueName;

use crate::tables::ScoringTables;
use crate::Framework;

/// Work-related values, leadership style and professional priorities.
pub struct CareerValues;

impl Framework for CareerValues {
    fn id(&self) -> &str {
        "career"
    }

    fn name(&self) -> &str {
        "Career Values Assessment"
    }

    fn description(&self) -> &str {
        "Focus on work-related values, leadership style, and professional priorities"
    }

    fn duration(&self) -> &str {
        "8-12 minutes"
    }

    fn question_count(&self) -> usize {
        8
    }

    fn tables(&self) -> ScoringTables {
        let mut tables = ScoringTables::default();
        // Workplace vocabulary on top of the shared synonyms.
        for (name, words) in [
            (ValueName::Achievement, ["promotion", "goal"]),
            (ValueName::Security, ["stable", "salary"]),
            (ValueName::Creativity, ["innovat", "design"]),
        ] {
            tables
                .synonyms
                .entry(name)
                .or_default()
                .extend(words.iter().map(|w| w.to_string()));
        }
        tables
    }
}
