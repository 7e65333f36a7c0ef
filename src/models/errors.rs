use crate::models::RawRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed row {row:?}: expected 4 fields, found {fields}")]
    MalformedRow {
        row: Vec<String>,
        fields: usize
    },
    #[error("Row {row:?} is not valid UTF-8 in field {field}")]
    InvalidEncoding {
        row: Vec<String>,
        field: usize
    },
    #[error("Invalid amount [{value}] in row {row:?}: {reason}")]
    InvalidAmount {
        row: Vec<String>,
        value: String,
        reason: String
    },
    #[error("Invalid date [{value}] in row {row:?}")]
    InvalidDate {
        row: Vec<String>,
        value: String
    },
    #[error("Invalid account id [{value}] in row {row:?}")]
    InvalidAccountId {
        row: Vec<String>,
        value: String
    }
}

impl ParseError {
    //NOTE: Every variant carries the raw row so a rejected line can be reproduced from the logs alone.

    pub fn malformed_row(row: &RawRow) -> Self {
        Self::MalformedRow {
            row: capture(row),
            fields: row.len()
        }
    }

    pub fn invalid_encoding(row: &RawRow, field: usize) -> Self {
        Self::InvalidEncoding {
            row: capture(row),
            field
        }
    }

    pub fn invalid_amount(row: &RawRow, value: &str, reason: impl ToString) -> Self {
        Self::InvalidAmount {
            row: capture(row),
            value: value.to_string(),
            reason: reason.to_string()
        }
    }

    pub fn invalid_date(row: &RawRow, value: &str) -> Self {
        Self::InvalidDate {
            row: capture(row),
            value: value.to_string()
        }
    }

    pub fn invalid_account_id(row: &RawRow, value: &str) -> Self {
        Self::InvalidAccountId {
            row: capture(row),
            value: value.to_string()
        }
    }
}

fn capture(row: &RawRow) -> Vec<String> {
    row.iter().map(|field| String::from_utf8_lossy(field).into_owned()).collect()
}
