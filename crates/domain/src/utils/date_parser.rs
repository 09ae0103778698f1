//! Calendar-date parsing and normalization.
//!
//! Every date that reaches storage goes through [`normalize_date`]. Accepted
//! inputs are a plain calendar date, an RFC 3339 timestamp (converted to UTC
//! before truncation) or a naive timestamp interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::MSG_DATE_REQUIRED;
use crate::errors::{DateLogError, Result};

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Normalize client input into a calendar date.
///
/// # Errors
/// Returns `DateLogError::Validation` when the input is blank or cannot be
/// parsed.
pub fn normalize_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateLogError::Validation(MSG_DATE_REQUIRED.to_string()));
    }

    parse_calendar_date(trimmed)
        .ok_or_else(|| DateLogError::Validation(format!("Invalid date: {trimmed}")))
}

/// Lenient parse used for both validation and aggregation.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, CALENDAR_DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(value, NAIVE_TIMESTAMP_FORMAT).ok().map(|dt| dt.date())
}

/// Canonical `YYYY-MM-DD` rendering.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}
