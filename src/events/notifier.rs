use std::sync::Arc;

use tracing::info;

use crate::events::EventBus;

/// Name of the event signalled once an import has fully drained.
pub const EVENT_IMPORTED: &str = "Imported";

pub struct CompletionNotifier {
    bus: Arc<dyn EventBus>
}

impl CompletionNotifier {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }

    pub fn notify(&self) {
        info!("Dispatching [{EVENT_IMPORTED}] event");
        self.bus.dispatch(EVENT_IMPORTED, None);
    }
}
