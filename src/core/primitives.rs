use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::types::RawValue;

/// Calendar format used by the budgeting API for record dates.
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date string.
///
/// A trailing time component separated by `T` or a space is ignored, so
/// `2024-03-01T00:00:00Z` resolves to the same calendar day as `2024-03-01`.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("date is empty".to_owned());
    }

    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, CALENDAR_DATE_FORMAT).map_err(|e| e.to_string())
}

/// Parses one raw record value.
///
/// `Ok(None)` means the value is known to be absent (`null` or blank text).
/// `Err` carries a reason when the value is present but not a number; callers
/// treat that as absent too, but may surface the reason for diagnostics.
pub fn parse_amount(value: &RawValue) -> Result<Option<f64>, String> {
    match value {
        RawValue::Null => Ok(None),
        RawValue::Number(number) => {
            if number.is_finite() {
                Ok(Some(*number))
            } else {
                Err("amount must be finite".to_owned())
            }
        }
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let decimal = Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map_err(|e| format!("amount `{trimmed}` is not a number: {e}"))?;
            decimal_to_f64(decimal).map(Some)
        }
    }
}

pub fn decimal_to_f64(value: Decimal) -> Result<f64, String> {
    value
        .to_f64()
        .filter(|number| number.is_finite())
        .ok_or_else(|| format!("amount {value} cannot be represented as f64"))
}
