use std::collections::{btree_map, BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Datelike;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::models::TransactionRecord;
use crate::storage::views::{BalanceAccumulator, BALANCES_VIEW, MONTHLY_BALANCES_VIEW};
use crate::storage::{Balance, BatchSink, Month, StorageError, SummaryBalance, ViewStore};
use crate::types::{AccountId, ExternalId};

/// In-memory transaction store with insert-or-ignore semantics on the external id.
///
/// The `balances` and `monthly_balances` views are snapshots: they only change
/// when [`ViewStore::refresh_view`] is called.
pub struct TransactionStorage {
    transactions: DashMap<ExternalId, TransactionRecord>,
    balances: DashMap<AccountId, Balance>,
    monthly_balances: DashMap<(AccountId, u32), Balance>
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
            balances: DashMap::new(),
            monthly_balances: DashMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, external_id: &str) -> Option<TransactionRecord> {
        self.transactions.get(external_id).map(|entry| entry.value().clone())
    }

    pub fn balance(&self, account_id: AccountId) -> Option<Balance> {
        self.balances.get(&account_id).map(|entry| entry.value().clone())
    }

    pub fn monthly_balance(&self, account_id: AccountId, month: u32) -> Option<Balance> {
        self.monthly_balances.get(&(account_id, month)).map(|entry| entry.value().clone())
    }

    /// All rows of the `balances` view, ordered by account.
    pub fn balances(&self) -> Vec<Balance> {
        let mut balances: Vec<Balance> = self.balances.iter().map(|entry| entry.value().clone()).collect();
        balances.sort_by_key(|balance| balance.account_id);
        balances
    }

    /// Joins each account's `balances` row with its `monthly_balances` rows.
    ///
    /// Accounts missing from either view are left out, so both views should be
    /// refreshed before building summaries.
    pub fn summaries(&self) -> BTreeMap<AccountId, SummaryBalance> {
        let mut summaries = BTreeMap::<AccountId, SummaryBalance>::new();

        for entry in self.monthly_balances.iter() {
            let (account_id, number) = *entry.key();

            let Some(month) = Month::from_number(number) else {
                warn!("Ignoring monthly balance of account [{account_id}] with month [{number}]");
                continue;
            };

            let summary = match summaries.entry(account_id) {
                btree_map::Entry::Occupied(summary) => summary.into_mut(),
                btree_map::Entry::Vacant(slot) => {
                    let Some(balance) = self.balance(account_id) else {
                        continue;
                    };
                    slot.insert(SummaryBalance::new(balance))
                }
            };

            summary.monthly.insert(month, entry.value().clone());
        }

        summaries
    }

    fn rebuild_balances(&self) {
        let mut accumulators = HashMap::<AccountId, BalanceAccumulator>::new();

        for entry in self.transactions.iter() {
            let record = entry.value();
            accumulators.entry(record.account_id).or_default().add(record);
        }

        self.balances.clear();

        for (account_id, accumulator) in accumulators {
            self.balances.insert(account_id, accumulator.finish(account_id));
        }
    }

    fn rebuild_monthly_balances(&self) {
        let mut accumulators = HashMap::<(AccountId, u32), BalanceAccumulator>::new();

        for entry in self.transactions.iter() {
            let record = entry.value();
            accumulators.entry((record.account_id, record.occurred_on.month())).or_default().add(record);
        }

        self.monthly_balances.clear();

        for ((account_id, month), accumulator) in accumulators {
            self.monthly_balances.insert((account_id, month), accumulator.finish(account_id));
        }
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchSink for TransactionStorage {
    async fn persist(&self, batch: Vec<TransactionRecord>) -> Result<(), StorageError> {
        let size = batch.len();
        let mut inserted = 0usize;

        for record in batch {
            if let Entry::Vacant(entry) = self.transactions.entry(record.external_id.clone()) {
                entry.insert(record);
                inserted += 1;
            }
        }

        debug!("Persisted batch of [{size}] records, [{}] already present", size - inserted);

        Ok(())
    }
}

impl ViewStore for TransactionStorage {
    fn refresh_view(&self, view: &str) -> Result<(), StorageError> {
        match view {
            BALANCES_VIEW => self.rebuild_balances(),
            MONTHLY_BALANCES_VIEW => self.rebuild_monthly_balances(),
            _ => return Err(StorageError::UnknownView(view.to_string()))
        }

        Ok(())
    }
}
