//! Format checks for string-backed field kinds
//!
//! URL and e-mail checks are pattern based and do not resolve anything.
//! Date-times accept RFC 3339 and offset-less ISO 8601 (read as UTC).

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:https?|ftps?)://(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?:localhost|[0-9]{1,3}(?:\.[0-9]{1,3}){3}|\[[0-9a-f:.]+\]|(?:[a-z0-9\x{a1}-\x{ffff}](?:[a-z0-9\x{a1}-\x{ffff}-]{0,61}[a-z0-9\x{a1}-\x{ffff}])?\.)+(?:[a-z\x{a1}-\x{ffff}]{2,63}|xn--[a-z0-9]{1,59})\.?)(?::[0-9]{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:localhost|(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9-]{2,63})$",
    )
    .unwrap()
});

/// Offset-less layouts tried after RFC 3339, most specific first
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true if `value` is an absolute http(s) or ftp(s) URL
pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Returns true if `value` looks like an e-mail address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Years an RFC 3339 UTC rendering can represent
const RFC3339_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Parses a date-time, reading offset-less values as UTC.
///
/// Values whose UTC instant falls outside years 0000-9999 are rejected.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let parsed = match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(_) => NAIVE_LAYOUTS.iter().find_map(|layout| {
            NaiveDateTime::parse_from_str(value, layout)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        }),
    };

    parsed.filter(|datetime| RFC3339_YEARS.contains(&datetime.year()))
}

/// Canonical text form of a date-time
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
