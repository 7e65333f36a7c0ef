use super::{BatchSink, Month, MonthlyCount, StorageError, TransactionStorage, ViewStore, BALANCES_VIEW, MONTHLY_BALANCES_VIEW};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::TransactionRecord;

fn record(external_id: &str, month: u32, day: u32, amount_cents: i64, account_id: u64) -> TransactionRecord {
    let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default();
    TransactionRecord::new(external_id.to_string(), date, amount_cents, account_id)
}

#[tokio::test]
async fn test_storage_persists_batches() -> Result<()> {
    let storage = TransactionStorage::new();

    assert!(storage.is_empty());

    storage.persist(vec![record("a", 1, 1, 100, 1), record("b", 1, 2, -50, 1)]).await?;

    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get("b").ok_or_else(|| anyhow!("record b missing"))?.amount_cents, -50);

    Ok(())
}

#[tokio::test]
async fn test_storage_ignores_duplicate_external_ids() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![record("a", 1, 1, 100, 1)]).await?;
    storage.persist(vec![record("a", 2, 2, 999, 2), record("c", 1, 1, 5, 1)]).await?;

    let original = storage.get("a").ok_or_else(|| anyhow!("record a missing"))?;

    assert_eq!(storage.len(), 2);
    assert_eq!(original.amount_cents, 100);
    assert_eq!(original.account_id, 1);

    Ok(())
}

#[tokio::test]
async fn test_storage_accepts_empty_batches() -> Result<()> {
    let storage = TransactionStorage::new();
    storage.persist(Vec::new()).await?;

    assert!(storage.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_balances_view_aggregates_per_account() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![
        record("a", 1, 1, 1_000, 1),
        record("b", 1, 5, 2_001, 1),
        record("c", 2, 1, -300, 1),
        record("d", 2, 3, 700, 2)
    ]).await?;

    assert!(storage.balance(1).is_none());

    storage.refresh_view(BALANCES_VIEW)?;

    let balance = storage.balance(1).ok_or_else(|| anyhow!("balance for account 1 missing"))?;

    assert_eq!(balance.total_balance, 2_701);
    assert_eq!(balance.transaction_count, 3);
    assert_eq!(balance.avg_credit_amount, 1_500);
    assert_eq!(balance.avg_debit_amount, -300);

    let balances = storage.balances();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[1].account_id, 2);
    assert_eq!(balances[1].avg_debit_amount, 0);

    Ok(())
}

#[tokio::test]
async fn test_monthly_balances_view_aggregates_per_month() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![
        record("a", 1, 1, 1_000, 1),
        record("b", 1, 5, -200, 1),
        record("c", 2, 1, 300, 1)
    ]).await?;

    storage.refresh_view(MONTHLY_BALANCES_VIEW)?;

    let january = storage.monthly_balance(1, 1).ok_or_else(|| anyhow!("january missing"))?;
    let february = storage.monthly_balance(1, 2).ok_or_else(|| anyhow!("february missing"))?;

    assert_eq!(january.total_balance, 800);
    assert_eq!(january.transaction_count, 2);
    assert_eq!(february.total_balance, 300);
    assert!(storage.monthly_balance(1, 3).is_none());
    assert!(storage.balance(1).is_none());

    Ok(())
}

#[tokio::test]
async fn test_views_are_snapshots_until_refreshed() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![record("a", 1, 1, 100, 1)]).await?;
    storage.refresh_view(BALANCES_VIEW)?;
    storage.persist(vec![record("b", 1, 1, 100, 1)]).await?;

    assert_eq!(storage.balance(1).map(|balance| balance.total_balance), Some(100));

    storage.refresh_view(BALANCES_VIEW)?;

    assert_eq!(storage.balance(1).map(|balance| balance.total_balance), Some(200));

    Ok(())
}

#[test]
fn test_unknown_view_is_rejected() {
    let storage = TransactionStorage::new();

    assert!(matches!(storage.refresh_view("nope"), Err(StorageError::UnknownView(ref view)) if view == "nope"));
}

#[test]
fn test_month_numbers_and_names() {
    assert_eq!(Month::from_number(1), Some(Month::January));
    assert_eq!(Month::from_number(12), Some(Month::December));
    assert_eq!(Month::from_number(0), None);
    assert_eq!(Month::from_number(13), None);
    assert_eq!(Month::September.number(), 9);
    assert_eq!(Month::September.to_string(), "September");

    let names: Vec<String> = Month::ALL.iter().map(Month::to_string).collect();

    assert_eq!(names.first().map(String::as_str), Some("January"));
    assert_eq!(names.last().map(String::as_str), Some("December"));
    assert!(Month::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_summaries_join_balances_with_months_in_calendar_order() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![
        record("a", 11, 2, 1_050, 1),
        record("b", 3, 5, -225, 1),
        record("c", 3, 9, 10_000, 1),
        record("d", 1, 20, -1, 1),
        record("e", 7, 7, 500, 2)
    ]).await?;

    storage.refresh_view(BALANCES_VIEW)?;
    storage.refresh_view(MONTHLY_BALANCES_VIEW)?;

    let summaries = storage.summaries();

    assert_eq!(summaries.keys().copied().collect::<Vec<_>>(), vec![1, 2]);

    let summary = summaries.get(&1).ok_or_else(|| anyhow!("summary for account 1 missing"))?;

    assert_eq!(summary.monthly_counts(), vec![
        MonthlyCount { month: "January".to_string(), count: 1 },
        MonthlyCount { month: "March".to_string(), count: 2 },
        MonthlyCount { month: "November".to_string(), count: 1 }
    ]);

    let report = summary.report();

    assert_eq!(report.account_id, 1);
    assert_eq!(report.total_balance, "108.24");
    assert_eq!(report.transaction_count, 4);
    assert_eq!(report.avg_credit_amount, "55.25");
    assert_eq!(report.avg_debit_amount, "-1.13");
    assert_eq!(report.monthly_balance.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_summaries_need_both_views() -> Result<()> {
    let storage = TransactionStorage::new();

    storage.persist(vec![record("a", 1, 1, 100, 1)]).await?;

    assert!(storage.summaries().is_empty());

    storage.refresh_view(BALANCES_VIEW)?;

    assert!(storage.summaries().is_empty());

    storage.refresh_view(MONTHLY_BALANCES_VIEW)?;

    assert_eq!(storage.summaries().len(), 1);

    Ok(())
}
