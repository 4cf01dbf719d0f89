// Store: the single entry point through which state changes.
//
// Purpose
// - Hold the application state and apply the root reducer on every dispatch.
// - Notify subscribers and run middleware after each transition.
//
// Responsibilities
// - Dispatches are serialized: reduce, then notify every subscriber once in registration order,
//   then run middleware in the order it was added.
// - `subscribe` hands back an `Unsubscribe` handle instead of a global registry entry.
//
// Boundaries
// - The store is an explicit object. Share it with `Arc<Store>`; there is no global instance.

use crate::core::store::action::Action;
use crate::core::store::evolve::evolve;
use crate::core::store::state::AppState;
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, RwLock};

pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Runs after the reducer and the subscribers for every dispatched action.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn after_dispatch(&self, action: &Action, state: &AppState);
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

pub struct Store {
    state: RwLock<AppState>,
    dispatching: Mutex<()>,
    listeners: Arc<Mutex<Listeners>>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwLock::new(initial),
            dispatching: Mutex::new(()),
            listeners: Arc::new(Mutex::new(Listeners::default())),
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Apply `action` and return the resulting state.
    pub async fn dispatch(&self, action: Action) -> AppState {
        let _serial = self.dispatching.lock().await;
        tracing::debug!(action = action.kind(), "dispatch");

        let next = {
            let mut guard = self.state.write().await;
            let prior = std::mem::take(&mut *guard);
            *guard = evolve(prior, &action);
            guard.clone()
        };

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .await
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&next);
        }

        for middleware in &self.middleware {
            middleware.after_dispatch(&action, &next).await;
        }
        next
    }

    pub async fn get_state(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Read a projection of the state without cloning all of it.
    pub async fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        selector(&*self.state.read().await)
    }

    pub async fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> Unsubscribe {
        let mut listeners = self.listeners.lock().await;
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Unsubscribe {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub async fn subscriber_count(&self) -> usize {
        self.listeners.lock().await.entries.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

/// Handle returned by `Store::subscribe`.
#[must_use = "dropping the handle keeps the listener subscribed"]
pub struct Unsubscribe {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Unsubscribe {
    pub async fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().await.entries.retain(|(id, _)| *id != self.id);
        }
    }
}
