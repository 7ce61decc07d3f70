//! Parsing of caller-supplied ISO-8601 timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// Parses an expiration timestamp.
///
/// # Accepted formats
///
/// - RFC 3339 with offset: `2026-12-31T23:59:59Z`, `2026-12-31T23:59:59+02:00`
/// - Naive date-time, read as UTC: `2026-12-31T23:59:59`, `2026-12-31T23:59:59.500`
/// - Bare date, midnight UTC: `2026-12-31`
///
/// # Errors
///
/// Returns [`AppError::Validation`] for any other input.
pub fn parse_expires_at(input: &str) -> Result<DateTime<Utc>, AppError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(AppError::bad_request(
        "expiresAt must be a valid ISO-8601 date",
        json!({ "expiresAt": input }),
    ))
}
