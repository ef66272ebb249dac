/// Utilities for reading API timestamps
///
/// The backend sends UTC timestamps either as RFC 3339 strings or as bare
/// `YYYY-MM-DD HH:MM:SS` values. Day boundaries are taken in UTC, the same
/// zone every date in the client is displayed in.
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an API timestamp; `None` for empty or unreadable values
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    log::debug!("unreadable timestamp: {value:?}");
    None
}

/// Midnight (UTC) of the day containing `instant`
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Last representable millisecond of the day containing `instant`
pub fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(instant) + Duration::days(1) - Duration::milliseconds(1)
}
