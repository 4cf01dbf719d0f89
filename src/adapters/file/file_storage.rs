// File backed implementation of the StateStorage port.
//
// Purpose
// - Keep the durable snapshot across runs of the console binary.
//
// Responsibilities
// - One file per key, `<dir>/<key>.json`.
// - Write through a temporary file and rename, so a crash never leaves a half written snapshot.
// - A missing file reads as "no snapshot".

use crate::core::ports::{StateStorage, StorageError};
use std::path::{Path, PathBuf};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn backend(error: std::io::Error, path: &Path) -> StorageError {
    StorageError::Backend(format!("{}: {error}", path.display()))
}

#[async_trait::async_trait]
impl StateStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(backend(error, &path)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| backend(e, &self.dir))?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(|e| backend(e, &tmp))?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| backend(e, &path))?;
        Ok(())
    }
}
