use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where the assessment history is kept between runs. Without it every
    /// run starts from the bundled fixtures.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Overrides the framework's number of ranked values.
    #[serde(default)]
    pub result_limit: Option<usize>,
    /// Values listed in the share text.
    #[serde(default = "default_share_limit")]
    pub share_limit: usize,
    /// Pause store operations as a remote backend would.
    #[serde(default)]
    pub simulate_latency: bool,
    /// JSON file replacing the framework's scoring tables.
    #[serde(default)]
    pub scoring_tables: Option<PathBuf>,
}

fn default_share_limit() -> usize {
    compass_export::render::DEFAULT_SHARE_LIMIT
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_file: None,
            result_limit: None,
            share_limit: default_share_limit(),
            simulate_latency: false,
            scoring_tables: None,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("values-compass"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or the defaults when the file does not exist.
pub fn load_config(path: &Path) -> eyre::Result<CompassConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CompassConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None => 0,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| eyre::eyre!("config_version {v} is not a supported version number"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: CompassConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Values Compass."
        ));
    }

    // Unversioned files already have the v1 shape; only the stamp is missing.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::debug!("stamped unversioned config as v{CURRENT_VERSION}");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CompassConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
