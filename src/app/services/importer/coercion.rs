//! Locale-tolerant cell coercion
//!
//! Measurement exports mix machine-generated ISO-8601 timestamps with
//! hand-entered Dutch dates and comma-decimal numbers. Coercion is total:
//! every function here returns a value for every input, substituting a
//! documented default when parsing fails. The `parse_*` variants expose the
//! failure as `None` so the ingestor can count defaulting events without
//! changing the coercion semantics.

use crate::constants::LOCALE_DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a timestamp cell, trying formats from most to least machine-like
///
/// ISO-8601 is attempted first (full RFC 3339, then a bare calendar date),
/// then the locale format `dd-MM-yyyy`. Date-only values resolve to midnight
/// UTC. Returns `None` when no format matches.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, LOCALE_DATE_FORMAT))
        .ok()?;

    naive_date
        .and_hms_opt(0, 0, 0)
        .map(|naive_dt| DateTime::from_naive_utc_and_offset(naive_dt, Utc))
}

/// Coerce a timestamp cell, falling back to the supplied import instant
pub fn coerce_timestamp(raw: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    parse_timestamp(raw).unwrap_or(fallback)
}

/// Parse a decimal cell tolerant of European comma-decimal notation
///
/// Every comma is replaced with a dot before the float parse. Thousands
/// separators are not handled: `"1.234,56"` becomes `"1.234.56"` and fails,
/// yielding `None`. This matches the source data convention (plain comma or
/// dot decimals, no grouping) and is a documented limitation rather than a
/// silent repair.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

/// Coerce a decimal cell, falling back to zero
pub fn coerce_decimal(raw: &str) -> f64 {
    parse_decimal(raw).unwrap_or(0.0)
}
