use std::sync::Arc;

use tracing::{error, info};

use crate::events::EventHandler;
use crate::storage::ViewStore;

/// Refreshes materialized views whenever it receives an event.
///
/// The list of views is fixed at construction.
pub struct BalanceRefresher {
    store: Arc<dyn ViewStore>,
    views: Arc<[String]>
}

impl BalanceRefresher {
    pub fn new<I, V>(store: Arc<dyn ViewStore>, views: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>
    {
        Self {
            store,
            views: views.into_iter().map(Into::into).collect()
        }
    }

    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// Refreshes every view in order. A failing view is logged and the rest are still refreshed.
    pub fn refresh(&self) -> usize {
        info!("Refreshing [{}] views", self.views.len());

        let mut refreshed = 0;

        for view in self.views.iter() {
            info!("Refreshing view [{view}]");

            match self.store.refresh_view(view) {
                Ok(()) => refreshed += 1,
                Err(error) => error!("Refreshing view [{view}] failed: {error}")
            }
        }

        refreshed
    }
}

impl EventHandler for BalanceRefresher {
    fn handle(&self, _event_name: &str, _payload: Option<&[u8]>) {
        self.refresh();
    }
}
