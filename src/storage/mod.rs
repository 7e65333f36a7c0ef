mod errors;
mod summary;
#[cfg(test)]
mod tests;
mod transaction_storage;
mod views;

use async_trait::async_trait;

use crate::models::TransactionRecord;

pub use errors::StorageError;
pub use summary::{Month, MonthlyCount, SummaryBalance, SummaryReport};
pub use transaction_storage::TransactionStorage;
pub use views::{Balance, BALANCES_VIEW, MONTHLY_BALANCES_VIEW};

/// Bulk persistence of parsed batches.
///
/// Implementations are shared by every worker and must accept concurrent calls.
/// Re-submitting a record whose external id is already stored is a no-op, not an error.
#[async_trait]
pub trait BatchSink: Send + Sync + 'static {
    async fn persist(&self, batch: Vec<TransactionRecord>) -> Result<(), StorageError>;
}

/// Materialized views derived from persisted transactions.
pub trait ViewStore: Send + Sync + 'static {
    fn refresh_view(&self, view: &str) -> Result<(), StorageError>;
}
