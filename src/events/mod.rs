mod dispatcher;
mod notifier;
mod refresher;

use std::sync::Arc;

pub use dispatcher::EventDispatcher;
pub use notifier::{CompletionNotifier, EVENT_IMPORTED};
pub use refresher::BalanceRefresher;

/// Receives events dispatched through an [`EventBus`].
pub trait EventHandler: Send + Sync + 'static {
    fn handle(&self, event_name: &str, payload: Option<&[u8]>);
}

/// Fan-out of named events to zero or more registered handlers.
pub trait EventBus: Send + Sync + 'static {
    fn register(&self, event_name: &str, handler: Arc<dyn EventHandler>);
    fn dispatch(&self, event_name: &str, payload: Option<Vec<u8>>);
}
