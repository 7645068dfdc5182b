use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::{MemoryStore, Record};

/// Load a JSON snapshot file.
pub async fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let body = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound {
                key: path.display().to_string(),
            }
        } else {
            StorageError::LoadFailure {
                what: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })?;
    let value = serde_json::from_slice(&body).map_err(|e| StorageError::LoadFailure {
        what: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(value)
}

/// Write a JSON snapshot file, replacing any previous one atomically.
pub async fn save_snapshot<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    let save_failure = |e: std::io::Error| StorageError::SaveFailure {
        what: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir).await.map_err(save_failure)?;
    }

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    tokio::fs::write(&tmp_path, &body).await.map_err(save_failure)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(save_failure)?;

    tracing::info!(path = %path.display(), "snapshot saved");
    Ok(())
}

/// Replace a store's contents with a snapshot, if the file exists.
///
/// Returns whether a snapshot was found.
pub async fn restore_store<T>(store: &MemoryStore<T>, path: &Path) -> Result<bool, StorageError>
where
    T: Record + DeserializeOwned,
{
    match load_snapshot::<Vec<T>>(path).await {
        Ok(records) => {
            store.init(records).await;
            Ok(true)
        }
        Err(StorageError::NotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Write a store's contents to a snapshot file.
pub async fn persist_store<T>(store: &MemoryStore<T>, path: &Path) -> Result<(), StorageError>
where
    T: Record + Serialize,
{
    save_snapshot(path, &store.snapshot().await).await
}
