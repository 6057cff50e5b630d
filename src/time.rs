//! Time related utils.

use chrono::Utc;

/// A UTC instant, captured once per signing operation.
pub type DateTime = chrono::DateTime<Utc>;

/// Take the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Date stamp format: "20240101".
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Compact ISO 8601 format: "20240101T000000Z".
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
