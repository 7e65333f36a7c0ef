use crate::types::errors::AmountError;
use crate::types::Cents;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES);

/// Converts a decimal string into minor currency units.
///
/// The value is truncated toward zero to two decimal places, scaled, then
/// truncated toward zero again. Fractions of a cent are dropped, never rounded.
pub fn string_to_cents(value: &str) -> Result<Cents, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    //NOTE: rust_decimal skips '_' separators, so the character set is checked up front
    if let Some(invalid) = value.chars().find(|c| !is_decimal_char(*c)) {
        return Err(AmountError::InvalidFormat(format!("Value [{value}] contains invalid character '{invalid}'")));
    }

    let decimal = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|error| AmountError::InvalidFormat(format!("Value [{value}] is not a decimal number: {error}")))?;

    let truncated = decimal.trunc_with_scale(DECIMAL_PLACES);

    let scaled = truncated.checked_mul(Decimal::from(SCALE))
        .ok_or(AmountError::Overflow)?;

    scaled.trunc().to_i64().ok_or(AmountError::Overflow)
}

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')
}

/// Renders minor units as a two decimal string, e.g. `-1.23`.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let scale = SCALE as u64;
    format!("{}{}.{:0width$}", sign, abs / scale, abs % scale, width = DECIMAL_PLACES as usize)
}
