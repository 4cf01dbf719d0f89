// Debounced SET_SEARCH_FILTER dispatch.
//
// Purpose
// - Turn rapid keystrokes into a single search dispatch once typing pauses.
//
// Responsibilities
// - One pending timer slot. New input aborts the pending timer and schedules a new one.
// - `submit` (Enter) cancels the timer and dispatches immediately.
// - `clear` (Escape) cancels the timer and dispatches an empty term.
// - `cancel` and drop abort the pending timer without dispatching.

use crate::application::store::Store;
use crate::core::store::action::set_search_filter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchDebouncer {
    store: Arc<Store>,
    window: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchDebouncer {
    pub fn new(store: Arc<Store>, window: Duration) -> Self {
        Self {
            store,
            window,
            pending: Mutex::new(None),
        }
    }

    pub async fn input(&self, term: impl Into<String>) {
        let term = term.into();
        let mut pending = self.pending.lock().await;
        if let Some(timer) = pending.take() {
            timer.abort();
        }
        let store = self.store.clone();
        let window = self.window;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            tracing::debug!(term = %term, "debounced search");
            store.dispatch(set_search_filter(term)).await;
        }));
    }

    pub async fn submit(&self, term: impl Into<String>) {
        self.cancel().await;
        self.store.dispatch(set_search_filter(term)).await;
    }

    pub async fn clear(&self) {
        self.submit(String::new()).await;
    }

    pub async fn cancel(&self) {
        if let Some(timer) = self.pending.lock().await.take() {
            timer.abort();
        }
    }

    pub async fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .await
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}
