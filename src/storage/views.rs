use serde::Serialize;

use crate::models::{TransactionKind, TransactionRecord};
use crate::types::{AccountId, Cents};

pub const BALANCES_VIEW: &str = "balances";
pub const MONTHLY_BALANCES_VIEW: &str = "monthly_balances";

/// Aggregated figures for one account, either overall or for a single month.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Balance {
    pub account_id: AccountId,
    pub total_balance: Cents,
    pub transaction_count: u64,
    pub avg_credit_amount: Cents,
    pub avg_debit_amount: Cents
}

/// Running sums used while a view is being rebuilt.
#[derive(Debug, Default)]
pub(crate) struct BalanceAccumulator {
    total: Cents,
    count: u64,
    credit_sum: Cents,
    credit_count: i64,
    debit_sum: Cents,
    debit_count: i64
}

impl BalanceAccumulator {
    pub(crate) fn add(&mut self, record: &TransactionRecord) {
        self.total = self.total.saturating_add(record.amount_cents);
        self.count += 1;

        match record.kind {
            TransactionKind::Credit => {
                self.credit_sum = self.credit_sum.saturating_add(record.amount_cents);
                self.credit_count += 1;
            }
            TransactionKind::Debit => {
                self.debit_sum = self.debit_sum.saturating_add(record.amount_cents);
                self.debit_count += 1;
            }
        }
    }

    pub(crate) fn finish(&self, account_id: AccountId) -> Balance {
        Balance {
            account_id,
            total_balance: self.total,
            transaction_count: self.count,
            avg_credit_amount: average(self.credit_sum, self.credit_count),
            avg_debit_amount: average(self.debit_sum, self.debit_count)
        }
    }
}

fn average(sum: Cents, count: i64) -> Cents {
    if count == 0 { 0 } else { sum / count }
}
