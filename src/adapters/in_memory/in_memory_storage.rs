// In memory implementation of the StateStorage port.
//
// Purpose
// - Stand in for browser local storage in tests and local development.
//
// Responsibilities
// - Keep serialized snapshots in a map keyed by storage key.
// - Fail every call while offline, the way a full or blocked storage would.

use crate::core::ports::{StateStorage, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Offline);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl StateStorage for InMemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_online()?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_online()?;
        self.entries.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
