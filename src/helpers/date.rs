//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats tried, in order, for strings carrying a time of day
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Formats tried, in order, for plain calendar dates
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

/// Parse a date string in various formats into a UTC instant
///
/// Strings with an explicit offset are shifted to UTC; strings without one
/// are taken as UTC. Returns `None` when nothing matches.
///
/// # Examples
/// ```ignore
/// parse_date_string("2024-01-15")           // -> 2024-01-15 00:00:00
/// parse_date_string("2024-01-15T09:00:00+09:00") // -> 2024-01-15 00:00:00
/// ```
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S %z", "%Y-%m-%dT%H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_utc());
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Format an instant as an ISO calendar date (`YYYY-MM-DD`)
pub fn format_ymd(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(s: &str) -> Option<String> {
        parse_date_string(s).map(|dt| format_ymd(&dt))
    }

    #[test]
    fn test_parse_plain_dates() {
        assert_eq!(ymd("2024-03-01"), Some("2024-03-01".to_string()));
        assert_eq!(ymd("2024/01/15"), Some("2024-01-15".to_string()));
        assert_eq!(ymd("March 1, 2024"), Some("2024-03-01".to_string()));
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        let dt = parse_date_string("2024-01-15T02:00:00+09:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-14 17:00");
    }

    #[test]
    fn test_parse_datetime_without_offset() {
        let dt = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "10:30:00");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date_string(""), None);
        assert_eq!(parse_date_string("someday"), None);
        assert_eq!(parse_date_string("2024-13-45"), None);
    }
}
