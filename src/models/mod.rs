mod errors;
mod parser;
mod transaction;

use serde::Serialize;

pub use errors::ParseError;
pub use parser::parse_record;
pub use transaction::TransactionRecord;

/// A single delimited data row: `[external_id, date, amount, account_id]`.
///
/// Rows stay as raw bytes until parsed, so a badly encoded line is rejected on its own.
pub type RawRow = csv::ByteRecord;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit
}
