use std::io::{stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_importer::engine::{ChunkImporter, ImportConfig};
use transaction_importer::events::{BalanceRefresher, EventBus, EventDispatcher, EVENT_IMPORTED};
use transaction_importer::readers::LocalFileReader;
use transaction_importer::storage::{Balance, TransactionStorage, BALANCES_VIEW, MONTHLY_BALANCES_VIEW};
use transaction_importer::types::{format_cents, AccountId};

const DEFAULT_VIEWS: [&str; 2] = [BALANCES_VIEW, MONTHLY_BALANCES_VIEW];

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Three positional arguments do not justify pulling in clap
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transaction-importer [input].csv [log_level:optional] [reference_year:optional] > [balances].csv");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        eprintln!("The reference year defaults to the current year");
        exit(1);
    }

    let path = &args[1];
    let log_level = parse_log_level(args.get(2).map(String::as_str));
    let reference_year = match args.get(3) {
        Some(year) => year.parse::<i32>().with_context(|| format!("Invalid reference year '{year}'"))?,
        None => chrono::Local::now().year()
    };

    setup_logging(log_level);

    let storage = Arc::new(TransactionStorage::new());
    let dispatcher = Arc::new(EventDispatcher::new(false));
    dispatcher.register(EVENT_IMPORTED, Arc::new(BalanceRefresher::new(storage.clone(), DEFAULT_VIEWS)));

    let importer = ChunkImporter::new(storage.clone(), dispatcher, ImportConfig::new(reference_year));

    let timer = Instant::now();
    let summary = importer.import(&LocalFileReader::new(), path).await?;
    let duration = timer.elapsed();

    info!("Imported {summary:?} in: {duration:?}");

    for account in storage.summaries().values().map(|summary| summary.report()) {
        info!("Account summary: {account:?}");
    }

    write_results_to_stdout(&storage.balances())?;

    Ok(())
}

fn parse_log_level(level: Option<&str>) -> LevelFilter {
    let Some(level) = level else {
        return LevelFilter::ERROR;
    };

    //NOTE: LevelFilter parses case-insensitively and also accepts "off" and numeric levels
    level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{level}', defaulting to 'error'");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the balances, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

#[derive(Serialize)]
struct BalanceRow {
    account_id: AccountId,
    total_balance: String,
    transaction_count: u64,
    avg_credit_amount: String,
    avg_debit_amount: String
}

impl From<&Balance> for BalanceRow {
    fn from(balance: &Balance) -> Self {
        Self {
            account_id: balance.account_id,
            total_balance: format_cents(balance.total_balance),
            transaction_count: balance.transaction_count,
            avg_credit_amount: format_cents(balance.avg_credit_amount),
            avg_debit_amount: format_cents(balance.avg_debit_amount)
        }
    }
}

fn write_results_to_stdout(balances: &[Balance]) -> Result<()> {
    //NOTE: Serializing structs only emits a header once a row exists, so the header is written by hand
    let mut output = WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout().lock());

    output.write_record(["account_id", "total_balance", "transaction_count", "avg_credit_amount", "avg_debit_amount"])?;

    for balance in balances {
        output.serialize(BalanceRow::from(balance))?;
    }

    output.flush()?;

    Ok(())
}
