use chrono::NaiveDate;
use serde::Serialize;

use crate::models::TransactionKind;
use crate::types::{AccountId, Cents, ExternalId};

/// A validated transaction, ready to be persisted.
///
/// Records are built once by [`parse_record`](crate::models::parse_record) and never
/// mutated afterwards. `kind` always agrees with the sign of `amount_cents`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Identifier assigned by the upstream file producer.
    pub external_id: ExternalId,
    /// Calendar date of the operation.
    pub occurred_on: NaiveDate,
    /// Signed amount in minor currency units.
    pub amount_cents: Cents,
    /// The target account.
    pub account_id: AccountId,
    /// Derived from the sign of the amount.
    pub kind: TransactionKind
}

impl TransactionRecord {
    pub fn new(external_id: ExternalId, occurred_on: NaiveDate, amount_cents: Cents, account_id: AccountId) -> Self {
        Self {
            external_id,
            occurred_on,
            amount_cents,
            account_id,
            kind: TransactionKind::from_cents(amount_cents)
        }
    }
}

impl TransactionKind {
    /// Negative amounts are debits; zero and positive amounts are credits.
    pub fn from_cents(amount_cents: Cents) -> Self {
        if amount_cents < 0 {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        }
    }
}
