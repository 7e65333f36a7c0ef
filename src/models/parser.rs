use chrono::NaiveDate;
use csv::StringRecord;

use crate::models::errors::ParseError;
use crate::models::{RawRow, TransactionRecord};
use crate::types::{string_to_cents, AccountId};

const FIELD_COUNT: usize = 4;

/// Parses and validates a single data row.
///
/// The row's `M/DD` date carries no year; `reference_year` supplies it so the
/// result depends only on the arguments.
///
/// # Errors
/// Returns `ParseError` if:
/// - The row does not have exactly four fields.
/// - A field is not valid UTF-8.
/// - The amount is not a decimal number.
/// - The date is not `M/DD` or names a day that does not exist in `reference_year`.
/// - The account id is not a non-negative integer.
pub fn parse_record(row: &RawRow, reference_year: i32) -> Result<TransactionRecord, ParseError> {
    if row.len() != FIELD_COUNT {
        return Err(ParseError::malformed_row(row))
    }

    let fields = StringRecord::from_byte_record(row.clone())
        .map_err(|error| ParseError::invalid_encoding(row, error.utf8_error().field()))?;

    let (external_id, date, amount, account_id) = (&fields[0], &fields[1], &fields[2], &fields[3]);

    let amount_cents = string_to_cents(amount)
        .map_err(|error| ParseError::invalid_amount(row, amount, error))?;

    let occurred_on = parse_date(reference_year, date)
        .ok_or_else(|| ParseError::invalid_date(row, date))?;

    let account_id: AccountId = account_id.parse()
        .map_err(|_| ParseError::invalid_account_id(row, account_id))?;

    Ok(TransactionRecord::new(external_id.to_string(), occurred_on, amount_cents, account_id))
}

/// Accepts `M/DD`: a one or two digit month and an exactly two digit day.
fn parse_date(reference_year: i32, value: &str) -> Option<NaiveDate> {
    let (month, day) = value.split_once('/')?;

    let month_is_valid = (1..=2).contains(&month.len()) && month.bytes().all(|b| b.is_ascii_digit());
    let day_is_valid = day.len() == 2 && day.bytes().all(|b| b.is_ascii_digit());

    if !month_is_valid || !day_is_valid {
        return None
    }

    NaiveDate::from_ymd_opt(reference_year, month.parse().ok()?, day.parse().ok()?)
}
