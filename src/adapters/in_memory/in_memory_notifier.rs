// In memory Notifier: collects toasts in order for inspection.

use crate::core::ports::Notifier;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    fn push(&self, notification: Notification) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(notification);
        }
    }
}

impl Notifier for InMemoryNotifier {
    fn success(&self, message: &str) {
        tracing::info!(message, "success toast");
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        tracing::warn!(message, "error toast");
        self.push(Notification::Error(message.to_string()));
    }
}
