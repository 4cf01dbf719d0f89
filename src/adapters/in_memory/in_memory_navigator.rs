// In memory Navigator: records every navigation for inspection.

use crate::core::ports::Navigator;
use crate::core::route::Route;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn current(&self) -> Route {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_default()
    }
}

impl Navigator for InMemoryNavigator {
    fn navigate(&self, route: &Route) {
        tracing::debug!(path = %route, "navigate");
        if let Ok(mut history) = self.history.lock() {
            history.push(route.clone());
        }
    }
}
