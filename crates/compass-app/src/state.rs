use compass_scoring::scorer::Scorer;
use compass_scoring::tables::ScoringTables;
use compass_scoring::Framework;
use compass_storage::assessments::AssessmentStore;
use compass_storage::error::StorageError;
use compass_storage::questions::QuestionStore;
use compass_storage::state as snapshots;
use compass_storage::store::Latency;
use compass_storage::values::ValueStore;

use crate::config::CompassConfig;
use crate::error::AppError;

/// Stores and settings shared by every command.
#[derive(Clone)]
pub struct AppState {
    pub config: CompassConfig,
    pub questions: QuestionStore,
    pub assessments: AssessmentStore,
    pub values: ValueStore,
    /// Replaces every framework's tables when set.
    pub tables_override: Option<ScoringTables>,
}

impl AppState {
    /// Seed the stores from the bundled fixtures, then restore the
    /// assessment history from the configured data file, if any.
    pub async fn load(config: CompassConfig) -> Result<Self, AppError> {
        let latency = Latency::from_flag(config.simulate_latency);
        let state = Self {
            questions: QuestionStore::seeded(latency)?,
            assessments: AssessmentStore::seeded(latency)?,
            values: ValueStore::seeded(latency)?,
            tables_override: load_tables(&config).await?,
            config,
        };

        if let Some(path) = &state.config.data_file {
            let restored = snapshots::restore_store(state.assessments.records(), path).await?;
            tracing::debug!(path = %path.display(), restored, "assessment history loaded");
        }
        Ok(state)
    }

    /// Write the assessment history to the configured data file, if any.
    pub async fn persist(&self) -> Result<(), AppError> {
        if let Some(path) = &self.config.data_file {
            snapshots::persist_store(self.assessments.records(), path).await?;
        }
        Ok(())
    }

    pub fn scorer_for(&self, framework: &dyn Framework) -> Scorer {
        let tables = self
            .tables_override
            .clone()
            .unwrap_or_else(|| framework.tables());
        Scorer::new(tables)
    }

    pub fn result_limit_for(&self, framework: &dyn Framework) -> usize {
        self.config
            .result_limit
            .unwrap_or_else(|| framework.result_limit())
    }
}

async fn load_tables(config: &CompassConfig) -> Result<Option<ScoringTables>, AppError> {
    let Some(path) = &config.scoring_tables else {
        return Ok(None);
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StorageError::LoadFailure {
            what: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let tables = ScoringTables::from_json(&json)?;
    tracing::info!(path = %path.display(), "scoring tables loaded");
    Ok(Some(tables))
}
