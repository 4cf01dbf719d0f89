// Persistence middleware and hydration.
//
// Purpose
// - Mirror the employees slice to durable storage after every dispatch.
// - Remember the chosen language under its own key.
// - Load both at start up so the store can be preloaded with them.
//
// Responsibilities
// - Only the employees slice is written as a snapshot. Apart from the language, the ui slice
//   always starts from defaults.
// - Storage and serialization failures are logged and swallowed; they never reach the caller.

use crate::application::store::Middleware;
use crate::core::ports::StateStorage;
use crate::core::store::action::Action;
use crate::core::store::state::{AppState, Language, PersistedState};
use async_trait::async_trait;
use std::sync::Arc;

pub const STORAGE_KEY: &str = "employeeApp";
pub const LANGUAGE_KEY: &str = "app-language";

pub struct PersistenceMiddleware {
    storage: Arc<dyn StateStorage>,
    key: String,
}

impl PersistenceMiddleware {
    pub fn new(storage: Arc<dyn StateStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

#[async_trait]
impl Middleware for PersistenceMiddleware {
    async fn after_dispatch(&self, action: &Action, state: &AppState) {
        let snapshot = PersistedState::from(state);
        let json = match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, action = action.kind(), "failed to serialize state");
                return;
            }
        };
        if let Err(error) = self.storage.write(&self.key, &json).await {
            tracing::warn!(%error, key = %self.key, action = action.kind(), "failed to save state");
        }
    }
}

/// The persisted snapshot under `key`, or `None` when absent, unreadable, or corrupt.
pub async fn load_persisted_state(storage: &dyn StateStorage, key: &str) -> Option<PersistedState> {
    let raw = match storage.read(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(%error, key, "failed to load state");
            return None;
        }
    };
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(state) => {
            tracing::debug!(key, employees = state.employees.list.len(), "loaded persisted state");
            Some(state)
        }
        Err(error) => {
            tracing::warn!(%error, key, "failed to parse persisted state");
            None
        }
    }
}

/// Writes the language to its own key whenever SET_LANGUAGE is dispatched.
pub struct LanguagePersistence {
    storage: Arc<dyn StateStorage>,
    key: String,
}

impl LanguagePersistence {
    pub fn new(storage: Arc<dyn StateStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

#[async_trait]
impl Middleware for LanguagePersistence {
    async fn after_dispatch(&self, action: &Action, _state: &AppState) {
        let Action::SetLanguage(language) = action else {
            return;
        };
        let json = match serde_json::to_string(language) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!(%error, %language, "failed to serialize language");
                return;
            }
        };
        if let Err(error) = self.storage.write(&self.key, &json).await {
            tracing::warn!(%error, key = %self.key, %language, "failed to save language");
        }
    }
}

/// The saved language, or `None` when absent, unreadable, or unsupported.
pub async fn load_language(storage: &dyn StateStorage, key: &str) -> Option<Language> {
    let raw = match storage.read(key).await {
        Ok(raw) => raw?,
        Err(error) => {
            tracing::warn!(%error, key, "failed to load language");
            return None;
        }
    };
    match serde_json::from_str::<Language>(&raw) {
        Ok(language) => Some(language),
        Err(error) => {
            tracing::warn!(%error, key, "ignoring saved language");
            None
        }
    }
}
