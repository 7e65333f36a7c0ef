use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::storage::Balance;
use crate::types::{format_cents, AccountId};

/// Calendar month, ordered January through December.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January, Month::February, Month::March, Month::April, Month::May, Month::June,
        Month::July, Month::August, Month::September, Month::October, Month::November, Month::December
    ];

    /// Maps a 1-based month number, as returned by `chrono::Datelike::month`.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December"
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One account's overall balance joined with its per-month balances.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SummaryBalance {
    pub balance: Balance,
    pub monthly: BTreeMap<Month, Balance>
}

/// Transaction count for a single month of a summary.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64
}

/// Presentation form of a [`SummaryBalance`], with amounts rendered as decimals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SummaryReport {
    pub account_id: AccountId,
    pub total_balance: String,
    pub transaction_count: u64,
    pub avg_credit_amount: String,
    pub avg_debit_amount: String,
    pub monthly_balance: Vec<MonthlyCount>
}

impl SummaryBalance {
    pub fn new(balance: Balance) -> Self {
        Self { balance, monthly: BTreeMap::new() }
    }

    /// Counts for the months that have transactions, January first. Months without any are left out.
    pub fn monthly_counts(&self) -> Vec<MonthlyCount> {
        self.monthly.iter()
            .map(|(month, balance)| MonthlyCount { month: month.to_string(), count: balance.transaction_count })
            .collect()
    }

    pub fn report(&self) -> SummaryReport {
        SummaryReport {
            account_id: self.balance.account_id,
            total_balance: format_cents(self.balance.total_balance),
            transaction_count: self.balance.transaction_count,
            avg_credit_amount: format_cents(self.balance.avg_credit_amount),
            avg_debit_amount: format_cents(self.balance.avg_debit_amount),
            monthly_balance: self.monthly_counts()
        }
    }
}
