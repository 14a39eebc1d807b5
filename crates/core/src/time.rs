//! Timestamp formatting for the CMS wire format.
//!
//! The host CMS stores `created`/`updated` columns as `YYYY-MM-DD HH:MM:SS`
//! strings in UTC. These helpers convert between that format and
//! [`Timestamp`].

use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::types::Timestamp;

/// The CMS datetime column format.
pub const CMS_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp as a CMS datetime string (UTC).
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format(CMS_DATETIME_FORMAT).to_string()
}

/// Parse a CMS datetime string, interpreting it as UTC.
///
/// Returns `None` if the input does not match the column format.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(value, CMS_DATETIME_FORMAT)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
