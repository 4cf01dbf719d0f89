// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe storage, the simulated backend, time, and the UI collaborators as traits.
//
// Responsibilities
// - Keep the core independent of any browser, file system, or timer by coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use crate::core::route::Route;
use crate::core::store::state::Language;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage offline")]
    Offline,

    #[error("backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Durable key/value storage holding serialized snapshots.
#[async_trait]
pub trait StateStorage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("employee service unavailable")]
    Offline,

    #[error("employee service rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayRequest {
    Create { email: String },
    Update { id: String },
    Delete { id: String },
}

impl GatewayRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayRequest::Create { .. } => "create",
            GatewayRequest::Update { .. } => "update",
            GatewayRequest::Delete { .. } => "delete",
        }
    }
}

/// Stand-in for the network round trip of a mutation.
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    async fn send(&self, request: &GatewayRequest) -> Result<(), GatewayError>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Toast sink.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Resolves a dotted key such as `validation.emailExists` to display text.
pub trait Translator: Send + Sync {
    fn translate(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}
