use crate::{ArtworkState, StoreError, StoreResult};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Saves and restores the whole state slice so it survives reloads.
#[async_trait::async_trait]
pub trait StatePersistence: Send + Sync {
    /// The last saved state, or `None` if nothing was saved yet.
    async fn load(&self) -> StoreResult<Option<ArtworkState>>;
    async fn save(&self, state: &ArtworkState) -> StoreResult<()>;
}

/// Keeps the snapshot as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl StatePersistence for JsonFilePersistence {
    async fn load(&self) -> StoreResult<Option<ArtworkState>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn save(&self, state: &ArtworkState) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Replace the snapshot atomically.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

/// Keeps the serialized snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    snapshot: Mutex<Option<String>>,
}

impl MemoryPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON of the last save.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot
            .lock()
            .map(|snapshot| snapshot.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl StatePersistence for MemoryPersistence {
    async fn load(&self) -> StoreResult<Option<ArtworkState>> {
        let snapshot = self
            .snapshot
            .lock()
            .map_err(|_| StoreError::Persistence("memory snapshot poisoned".to_string()))?
            .clone();

        snapshot
            .map(|json| serde_json::from_str(&json).map_err(StoreError::from))
            .transpose()
    }

    async fn save(&self, state: &ArtworkState) -> StoreResult<()> {
        let json = serde_json::to_string(state)?;
        *self
            .snapshot
            .lock()
            .map_err(|_| StoreError::Persistence("memory snapshot poisoned".to_string()))? =
            Some(json);
        Ok(())
    }
}
