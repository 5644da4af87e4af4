// crates/arbor-store/src/json.rs
//
// JSON-file snapshot store implementing the `StateStore` trait.
//
// The whole contract state is one pretty-printed JSON document. Saves write
// to `<path>.tmp` and rename over the target, so a crash mid-write leaves the
// previous snapshot intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use arbor_core::error::ArborError;
use arbor_core::traits::StateStore;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl<S> StateStore<S> for JsonFileStore
where
    S: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Result<Option<S>, ArborError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ArborError::Storage(format!(
                    "Failed to read snapshot {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let state = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Snapshot loaded");
        Ok(Some(state))
    }

    async fn save(&self, state: &S) -> Result<(), ArborError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(state)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            ArborError::Storage(format!("Failed to write snapshot {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            ArborError::Storage(format!(
                "Failed to move snapshot into place at {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "Snapshot saved");
        Ok(())
    }
}
