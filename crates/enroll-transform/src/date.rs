//! Day-month-year to ISO date conversion.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unparseable date: {value}")]
pub struct DateParseError {
    pub value: String,
}

/// Convert a day-month-year date string to ISO `YYYY-MM-DD`.
///
/// Day and month may be zero-padded or not. Empty input stays empty.
pub fn convert_date(raw: &str, separator: char) -> Result<String, DateParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let format = format!("%d{separator}%m{separator}%Y");
    NaiveDate::parse_from_str(trimmed, &format)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| DateParseError {
            value: trimmed.to_string(),
        })
}
