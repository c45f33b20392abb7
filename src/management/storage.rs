use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| StorageError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| StorageError::serde(path, e))
}

/// Rewrites the whole file with `value` as pretty JSON.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::io(parent, e))?;
        }
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| StorageError::serde(path, e))?;
    async_fs::write(path, json)
        .await
        .map_err(|e| StorageError::io(path, e))
}
