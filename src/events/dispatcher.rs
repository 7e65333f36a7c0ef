use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::spawn_blocking;
use tracing::{debug, error};

use crate::events::{EventBus, EventHandler};

type Registry = HashMap<String, Vec<Arc<dyn EventHandler>>>;

/// In-process event bus.
///
/// Handlers are kept per event name in registration order behind a single lock.
/// Registration happens at startup and dispatch once per import, so contention is negligible.
pub struct EventDispatcher {
    handlers: Mutex<Registry>,
    async_dispatch: bool
}

impl EventDispatcher {
    /// Creates a dispatcher. With `async_dispatch` every handler runs on the blocking
    /// pool and `dispatch` returns without waiting; this requires a Tokio runtime.
    pub fn new(async_dispatch: bool) -> Self {
        Self {
            handlers: Mutex::new(HashMap::new()),
            async_dispatch
        }
    }

    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_name)
            .map_or(0, Vec::len)
    }
}

impl EventBus for EventDispatcher {
    fn register(&self, event_name: &str, handler: Arc<dyn EventHandler>) {
        self.handlers.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    fn dispatch(&self, event_name: &str, payload: Option<Vec<u8>>) {
        //NOTE: Snapshot the handlers so none of them runs while the registry is locked
        let handlers = match self.handlers.lock().unwrap_or_else(PoisonError::into_inner).get(event_name) {
            Some(handlers) => handlers.clone(),
            None => {
                debug!("No handlers registered for event [{event_name}]");
                return;
            }
        };

        if !self.async_dispatch {
            for handler in &handlers {
                handler.handle(event_name, payload.as_deref());
            }
            return;
        }

        let payload: Option<Arc<[u8]>> = payload.map(Arc::from);

        for handler in handlers {
            let event_name = event_name.to_string();
            let payload = payload.clone();

            let handle = spawn_blocking(move || handler.handle(&event_name, payload.as_deref()));

            tokio::spawn(async move {
                if let Err(error) = handle.await {
                    error!("An event handler did not complete: {error}");
                }
            });
        }
    }
}
